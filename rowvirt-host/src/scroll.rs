use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::{ContainerId, ListenerId, ListenerOptions, ScrollContainer};

/// A custom scroll-to behavior (e.g. smooth scrolling).
///
/// It receives the target offset and the default behavior, which sets the container's scroll
/// position directly, so it can fall back to it.
pub type ScrollToFn = Rc<dyn Fn(f64, &dyn Fn(f64))>;

/// A registered scroll listener; dropping it removes the listener from the element.
pub struct ScrollSubscription<C: ScrollContainer> {
    element: C,
    listener: ListenerId,
}

impl<C: ScrollContainer> ScrollSubscription<C> {
    fn new(element: &C, offset: Rc<Cell<f64>>, events: Rc<Cell<u64>>) -> Self {
        let target = element.clone();
        let listener = element.add_scroll_listener(
            ListenerOptions::PASSIVE,
            Rc::new(move || {
                offset.set(target.scroll_top());
                events.set(events.get().wrapping_add(1));
            }),
        );
        Self {
            element: element.clone(),
            listener,
        }
    }

    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<C: ScrollContainer> Drop for ScrollSubscription<C> {
    fn drop(&mut self) {
        vtrace!(
            id = self.element.id().0,
            "ScrollSubscription: removing scroll listener"
        );
        self.element.remove_scroll_listener(self.listener);
    }
}

/// Publishes a container's scroll offset and scrolls it on request.
pub struct ScrollBinding<C: ScrollContainer> {
    offset: Rc<Cell<f64>>,
    events: Rc<Cell<u64>>,
    subscription: Option<ScrollSubscription<C>>,
    scroll_to_fn: Option<ScrollToFn>,
}

impl<C: ScrollContainer> Default for ScrollBinding<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ScrollContainer> ScrollBinding<C> {
    pub fn new() -> Self {
        Self {
            offset: Rc::new(Cell::new(0.0)),
            events: Rc::new(Cell::new(0)),
            subscription: None,
            scroll_to_fn: None,
        }
    }

    pub fn with_scroll_to_fn(mut self, scroll_to_fn: Option<ScrollToFn>) -> Self {
        self.scroll_to_fn = scroll_to_fn;
        self
    }

    pub fn set_scroll_to_fn(&mut self, scroll_to_fn: Option<ScrollToFn>) {
        self.scroll_to_fn = scroll_to_fn;
    }

    /// The latest published scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Number of scroll events received so far; changes whenever a recompute is due.
    pub fn events(&self) -> u64 {
        self.events.get()
    }

    pub fn element(&self) -> Option<ContainerId> {
        self.subscription.as_ref().map(|s| s.element.id())
    }

    /// Binds to `element`, or unbinds when it is `None`.
    ///
    /// Binding to a new element replaces the previous subscription and publishes the element's
    /// current offset. Unbinding releases the subscription and resets the offset to `0`.
    pub fn sync(&mut self, element: Option<&C>) {
        match element {
            None => {
                if self.subscription.take().is_some() {
                    vdebug!("ScrollBinding: container detached");
                }
                self.offset.set(0.0);
            }
            Some(el) if self.element() == Some(el.id()) => {}
            Some(el) => {
                vdebug!(id = el.id().0, "ScrollBinding: container attached");
                self.subscription = None;
                self.offset.set(el.scroll_top());
                self.subscription = Some(ScrollSubscription::new(
                    el,
                    Rc::clone(&self.offset),
                    Rc::clone(&self.events),
                ));
            }
        }
    }

    /// Scrolls the bound container to `offset`, through the custom behavior when one is set.
    ///
    /// Does nothing while no container is bound.
    pub fn scroll_to(&self, offset: f64) {
        let Some(subscription) = &self.subscription else {
            vtrace!(offset, "ScrollBinding: scroll_to without a container");
            return;
        };
        vtrace!(offset, "ScrollBinding::scroll_to");
        let element = &subscription.element;
        let default = |offset: f64| element.set_scroll_top(offset);
        match &self.scroll_to_fn {
            Some(f) => f(offset, &default),
            None => default(offset),
        }
    }
}

impl<C: ScrollContainer> fmt::Debug for ScrollBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBinding")
            .field("offset", &self.offset.get())
            .field("events", &self.events.get())
            .field("element", &self.element())
            .field("has_scroll_to_fn", &self.scroll_to_fn.is_some())
            .finish()
    }
}
