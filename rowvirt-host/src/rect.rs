use rowvirt::Rect;

use crate::{ContainerId, ScrollContainer};

/// Tracks the content-box size of a container element.
///
/// The host calls [`RectObserver::sync`] with the current element on every render and forwards
/// resize notifications from its layout observer to [`RectObserver::on_resize`].
#[derive(Clone, Debug)]
pub struct RectObserver {
    rect: Rect,
    element: Option<ContainerId>,
}

impl RectObserver {
    pub fn new(initial_rect: Rect) -> Self {
        Self {
            rect: initial_rect,
            element: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn element(&self) -> Option<ContainerId> {
        self.element
    }

    pub fn is_observing(&self) -> bool {
        self.element.is_some()
    }

    /// Associates the observer with `element`.
    ///
    /// A newly associated element has its bounding rect read synchronously, so the first frame
    /// does not render with a stale size. `None` stops observing and, if an element was
    /// attached, degrades the rect to zero.
    ///
    /// Returns `true` when the rect changed.
    pub fn sync<C: ScrollContainer>(&mut self, element: Option<&C>) -> bool {
        match element {
            None => {
                let Some(id) = self.element.take() else {
                    return false;
                };
                vdebug!(id = id.0, "RectObserver: element detached");
                self.apply(Rect::ZERO)
            }
            Some(el) if self.element == Some(el.id()) => false,
            Some(el) => {
                let id = el.id();
                vdebug!(id = id.0, "RectObserver: element attached");
                self.element = Some(id);
                self.apply(el.bounding_rect())
            }
        }
    }

    /// Applies a resize notification for `element`.
    ///
    /// Notifications for an element other than the observed one are dropped. Returns `true`
    /// when width or height actually changed.
    pub fn on_resize(&mut self, element: ContainerId, rect: Rect) -> bool {
        if self.element != Some(element) {
            vtrace!(id = element.0, "RectObserver: ignoring resize of unobserved element");
            return false;
        }
        self.apply(rect)
    }

    fn apply(&mut self, rect: Rect) -> bool {
        if rect.width == self.rect.width && rect.height == self.rect.height {
            return false;
        }
        vtrace!(
            width = rect.width,
            height = rect.height,
            "RectObserver: rect changed"
        );
        self.rect = rect;
        true
    }
}
