use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use rowvirt::Rect;

use crate::{
    ContainerId, ListenerId, ListenerOptions, MeasureElement, ScrollContainer, ScrollListener,
};

/// An in-memory scroll container for headless hosts (terminal UIs, simulations, tests).
///
/// Clones share the same element. Setting the scroll position dispatches the scroll listeners
/// synchronously.
#[derive(Clone)]
pub struct MemoryContainer {
    inner: Rc<Inner>,
}

struct Inner {
    id: ContainerId,
    rect: Cell<Rect>,
    scroll_top: Cell<f64>,
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, ListenerOptions, ScrollListener)>>,
}

impl MemoryContainer {
    pub fn new(id: u64, rect: Rect) -> Self {
        Self {
            inner: Rc::new(Inner {
                id: ContainerId(id),
                rect: Cell::new(rect),
                scroll_top: Cell::new(0.0),
                next_listener: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Changes the element size. The host forwards it to the list via `on_resize`.
    pub fn resize(&self, rect: Rect) {
        self.inner.rect.set(rect);
    }

    /// Simulates a user scroll.
    pub fn scroll_by(&self, delta: f64) {
        self.set_scroll_top(self.scroll_top() + delta);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listener_options(&self) -> Vec<ListenerOptions> {
        self.inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, options, _)| *options)
            .collect()
    }

    fn dispatch_scroll(&self) {
        // Listeners may read the element, so release the borrow before calling them.
        let listeners: Vec<ScrollListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, _, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl ScrollContainer for MemoryContainer {
    fn id(&self) -> ContainerId {
        self.inner.id
    }

    fn bounding_rect(&self) -> Rect {
        self.inner.rect.get()
    }

    fn scroll_top(&self) -> f64 {
        self.inner.scroll_top.get()
    }

    fn set_scroll_top(&self, offset: f64) {
        self.inner.scroll_top.set(offset.max(0.0));
        self.dispatch_scroll();
    }

    fn add_scroll_listener(
        &self,
        options: ListenerOptions,
        listener: ScrollListener,
    ) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, options, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener, _, _)| *listener != id);
    }
}

impl fmt::Debug for MemoryContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryContainer")
            .field("id", &self.inner.id)
            .field("rect", &self.inner.rect.get())
            .field("scroll_top", &self.inner.scroll_top.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A rendered item with a fixed laid-out height; `None` models an element already removed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryElement {
    pub height: Option<f64>,
}

impl MemoryElement {
    pub fn new(height: f64) -> Self {
        Self {
            height: Some(height),
        }
    }

    pub fn detached() -> Self {
        Self { height: None }
    }
}

impl MeasureElement for MemoryElement {
    fn offset_height(&self) -> Option<f64> {
        self.height
    }
}
