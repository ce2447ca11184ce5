use alloc::rc::Rc;

use rowvirt::Rect;

/// Identity of a live container element.
///
/// Two handles with the same id refer to the same element; a new id means the host replaced the
/// element (e.g. remounted the list).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

/// Handle of a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Event listener registration flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

impl ListenerOptions {
    /// Passive and non-capturing: the listener never blocks scrolling.
    pub const PASSIVE: Self = Self {
        passive: true,
        capture: false,
    };
}

pub type ScrollListener = Rc<dyn Fn()>;

/// A scrollable container element owned by the host UI.
///
/// Implementations are cheap handles (clones refer to the same element) with interior
/// mutability, the way DOM element handles behave. Everything runs on the UI thread.
pub trait ScrollContainer: Clone + 'static {
    fn id(&self) -> ContainerId;

    /// Current content-box size, read synchronously.
    fn bounding_rect(&self) -> Rect;

    fn scroll_top(&self) -> f64;

    fn set_scroll_top(&self, offset: f64);

    /// Registers `listener` to be called after every scroll of this element.
    fn add_scroll_listener(&self, options: ListenerOptions, listener: ScrollListener)
    -> ListenerId;

    fn remove_scroll_listener(&self, id: ListenerId);
}

/// A rendered item element whose laid-out size can be read back.
pub trait MeasureElement {
    /// The element's rendered height, or `None` if it is no longer laid out.
    fn offset_height(&self) -> Option<f64>;
}
