use rowvirt::{ItemKey, MeasureRef, Rect, VirtualFrame, Virtualizer, VirtualizerOptions};

use crate::{
    ContainerId, Easing, MeasureElement, RectObserver, ScrollBinding, ScrollContainer, ScrollToFn,
    Tween,
};

/// A virtualized list bound to a host container.
///
/// Composes the three pieces a rendered list needs:
/// - [`RectObserver`] supplies the viewport height,
/// - [`ScrollBinding`] supplies the scroll offset and applies scroll corrections,
/// - [`Virtualizer`] turns both into the items to render.
///
/// A host drives it by calling:
/// - `set_container` whenever the container element is (re)mounted or removed,
/// - `on_resize` when its layout observer reports a new size,
/// - `render` on every render pass,
/// - `measure_element` once each rendered item is laid out,
/// - `tick(now_ms)` each frame while a smooth scroll is running.
pub struct VirtualList<C: ScrollContainer, K = usize> {
    v: Virtualizer<K>,
    rect: RectObserver,
    scroll: ScrollBinding<C>,
    container: Option<C>,
    tween: Option<Tween>,
}

impl<C: ScrollContainer, K: ItemKey> VirtualList<C, K> {
    pub fn new(options: VirtualizerOptions<K>) -> Self {
        let rect = RectObserver::new(options.initial_rect.unwrap_or_default());
        Self {
            v: Virtualizer::new(options),
            rect,
            scroll: ScrollBinding::new(),
            container: None,
            tween: None,
        }
    }

    pub fn virtualizer(&self) -> &Virtualizer<K> {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut Virtualizer<K> {
        &mut self.v
    }

    pub fn set_options(&mut self, options: VirtualizerOptions<K>) {
        self.v.set_options(options);
    }

    pub fn set_scroll_to_fn(&mut self, scroll_to_fn: Option<ScrollToFn>) {
        self.scroll.set_scroll_to_fn(scroll_to_fn);
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    /// Mounts, replaces or (with `None`) unmounts the container element.
    ///
    /// Unmounting stops rect observation, releases the scroll listener and resets both the
    /// viewport size and the scroll offset to `0`, so nothing renders until a container is
    /// mounted again.
    pub fn set_container(&mut self, container: Option<C>) {
        self.rect.sync(container.as_ref());
        self.scroll.sync(container.as_ref());
        if container.is_none() {
            self.tween = None;
        }
        self.container = container;
    }

    /// Forwards a resize notification. Returns `true` when the list must re-render.
    pub fn on_resize(&mut self, element: ContainerId, rect: Rect) -> bool {
        self.rect.on_resize(element, rect)
    }

    pub fn rect(&self) -> Rect {
        self.rect.rect()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Number of scroll events seen; a change means a re-render is due.
    pub fn scroll_events(&self) -> u64 {
        self.scroll.events()
    }

    /// Feeds the latest viewport size and scroll offset into the engine and computes the frame.
    pub fn render(&mut self) -> VirtualFrame<K> {
        self.sync_snapshot();
        self.v.compute()
    }

    /// Reports the rendered size of an item's element.
    ///
    /// A missing element, or one that can no longer be measured, is ignored. When the item sits
    /// above the scroll offset, the container is scrolled by the size delta so the content under
    /// the viewport stays put.
    pub fn measure_element<E: MeasureElement>(
        &mut self,
        item: &MeasureRef<K>,
        element: Option<&E>,
    ) {
        let Some(size) = element.and_then(|el| el.offset_height()) else {
            vtrace!(index = item.index, "measure_element: element not measurable");
            return;
        };
        self.sync_snapshot();
        if let Some(offset) = self.v.report_size(item, size) {
            self.scroll.scroll_to(offset);
        }
    }

    /// Drops every measured size so all items are measured again.
    pub fn measure(&mut self) {
        self.v.measure();
    }

    /// Scrolls the container to `offset` immediately, cancelling any smooth scroll.
    pub fn scroll_to_offset(&mut self, offset: f64) {
        self.tween = None;
        self.scroll.scroll_to(offset);
    }

    /// Starts a smooth scroll towards `offset`, clamped to the scrollable extent.
    ///
    /// A running smooth scroll is replaced, continuing from its current position with the new
    /// duration and easing. Returns the clamped target.
    pub fn start_smooth_scroll(
        &mut self,
        offset: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let max = (self.v.total_size() - self.rect.rect().height).max(0.0);
        let to = offset.clamp(0.0, max);
        let from = self
            .tween
            .map_or_else(|| self.scroll.offset(), |tween| tween.sample(now_ms));
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Advances a running smooth scroll, returning the offset applied this frame.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        self.scroll.scroll_to(offset);
        if tween.is_done(now_ms) {
            vtrace!(offset, "smooth scroll finished");
            self.tween = None;
        }
        Some(offset)
    }

    fn sync_snapshot(&mut self) {
        self.v.set_outer_size(self.rect.rect().height);
        self.v.set_scroll_offset(self.scroll.offset());
    }
}
