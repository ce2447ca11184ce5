use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::measurement::{rebuild_measurements, total_size};
use crate::range::{calculate_range, find_nearest_binary_search};
use crate::{
    ItemKey, MeasureRef, MeasuredCache, Measurement, Range, RangeExtractor, VirtualFrame,
    VirtualItem, VirtualizerOptions, default_range_extractor,
};

/// A headless row virtualization engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - The host feeds it the viewport size and scroll offset before each [`Virtualizer::compute`].
/// - Rendered items report their real size back through [`Virtualizer::report_size`].
///
/// Measurements are rebuilt lazily: size corrections and option changes only mark the sequence
/// dirty from the smallest affected index, and the next `compute` rebuilds that suffix while the
/// prefix is kept as is.
#[derive(Clone, Debug)]
pub struct Virtualizer<K = usize> {
    options: VirtualizerOptions<K>,
    scroll_offset: f64,
    outer_size: f64,

    measurements: Vec<Measurement<K>>,
    measured_cache: MeasuredCache<K>,
    /// Smallest index whose measurement is stale, if any.
    rebuild_from: Option<usize>,
    /// Set by the first `compute`; estimator changes before it keep the cache.
    mounted: bool,
}

impl<K: ItemKey> Virtualizer<K> {
    /// Creates a new virtualizer from options.
    ///
    /// `options.initial_rect` seeds the outer size until the host reports a real one.
    pub fn new(options: VirtualizerOptions<K>) -> Self {
        vdebug!(
            count = options.count,
            overscan = options.overscan,
            "Virtualizer::new"
        );
        let outer_size = options.initial_rect.map_or(0.0, |r| r.height);
        let mut v = Self {
            options,
            scroll_offset: 0.0,
            outer_size,
            measurements: Vec::new(),
            measured_cache: MeasuredCache::new(),
            rebuild_from: Some(0),
            mounted: false,
        };
        v.flush_measurements();
        v
    }

    pub fn options(&self) -> &VirtualizerOptions<K> {
        &self.options
    }

    /// Replaces the options, marking measurements dirty when the layout inputs changed.
    ///
    /// A new estimator (by `Arc` identity) after the first `compute` also drops every measured
    /// size, since they must be re-measured under the new sizing strategy.
    pub fn set_options(&mut self, options: VirtualizerOptions<K>) {
        let estimator_changed = !Arc::ptr_eq(&self.options.estimate_size, &options.estimate_size);
        let key_changed = !Arc::ptr_eq(&self.options.get_item_key, &options.get_item_key);
        let layout_changed = estimator_changed
            || key_changed
            || self.options.count != options.count
            || self.options.padding_start != options.padding_start;
        self.options = options;
        vtrace!(
            count = self.options.count,
            overscan = self.options.overscan,
            estimator_changed,
            "Virtualizer::set_options"
        );

        if estimator_changed && self.mounted {
            vdebug!(
                entries = self.measured_cache.len(),
                "estimator changed, invalidating measured cache"
            );
            self.measured_cache.clear();
        }
        if layout_changed {
            self.mark_dirty(0);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualizerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.update_options(|o| o.count = count);
    }

    pub fn set_estimate_size(&mut self, f: impl Fn(usize) -> f64 + Send + Sync + 'static) {
        self.update_options(|o| o.estimate_size = Arc::new(f));
    }

    pub fn set_get_item_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.update_options(|o| o.get_item_key = Arc::new(f));
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.update_options(|o| o.overscan = overscan);
    }

    pub fn set_padding(&mut self, padding_start: f64, padding_end: f64) {
        self.update_options(|o| {
            o.padding_start = padding_start;
            o.padding_end = padding_end;
        });
    }

    pub fn set_range_extractor(
        &mut self,
        range_extractor: Option<impl Fn(Range, &mut dyn FnMut(usize)) + Send + Sync + 'static>,
    ) {
        let range_extractor: Option<RangeExtractor> = range_extractor.map(|f| Arc::new(f) as _);
        self.update_options(|o| o.range_extractor = range_extractor);
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        vtrace!(offset, "Virtualizer::set_scroll_offset");
        self.scroll_offset = offset;
    }

    pub fn outer_size(&self) -> f64 {
        self.outer_size
    }

    pub fn set_outer_size(&mut self, size: f64) {
        vtrace!(size, "Virtualizer::set_outer_size");
        self.outer_size = size;
    }

    /// Drops every measured size; the next `compute` uses estimates only.
    pub fn measure(&mut self) {
        vdebug!(
            entries = self.measured_cache.len(),
            "Virtualizer::measure (cache invalidated)"
        );
        self.measured_cache.clear();
        self.mark_dirty(0);
    }

    pub fn measured_cache(&self) -> &MeasuredCache<K> {
        &self.measured_cache
    }

    /// Records the rendered size of an item.
    ///
    /// Does nothing when `measured` equals the size the item was rendered with, or is not a
    /// finite non-negative number. Otherwise the size is cached under the item key and the item
    /// is marked for correction on the next `compute`.
    ///
    /// Returns the offset to scroll to when the item starts above the current scroll offset:
    /// the offset shifted by the size delta, so content under the viewport does not jump. The
    /// engine does not apply it; the host scrolls its container and feeds the resulting offset
    /// back through `set_scroll_offset`.
    pub fn report_size(&mut self, item: &MeasureRef<K>, measured: f64) -> Option<f64> {
        if !measured.is_finite() || measured < 0.0 {
            vwarn!(index = item.index, measured, "ignoring invalid measured size");
            return None;
        }
        if measured == item.size {
            return None;
        }

        let delta = measured - item.size;
        vtrace!(index = item.index, measured, delta, "Virtualizer::report_size");

        let adjust_to = (item.start < self.scroll_offset).then(|| self.scroll_offset + delta);
        self.measured_cache.insert(item.key.clone(), measured);
        self.mark_dirty(item.index);
        adjust_to
    }

    /// Whether a correction or option change is waiting for the next `compute`.
    pub fn is_dirty(&self) -> bool {
        self.rebuild_from.is_some()
    }

    /// Measurements as of the last rebuild.
    pub fn measurements(&self) -> &[Measurement<K>] {
        &self.measurements
    }

    /// Total scrollable extent as of the last rebuild, including both paddings.
    pub fn total_size(&self) -> f64 {
        total_size(
            &self.measurements,
            self.options.padding_start,
            self.options.padding_end,
        )
    }

    /// Returns the index of the item covering `offset`, clamped to the first item.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let last = self.measurements.len().checked_sub(1)?;
        Some(find_nearest_binary_search(
            0,
            last,
            |i| self.measurements[i].start,
            offset,
        ))
    }

    /// The visible range (no overscan) for the current scroll offset and outer size.
    pub fn range(&self) -> Option<Range> {
        let (start, end) =
            calculate_range(&self.measurements, self.scroll_offset, self.outer_size)?;
        Some(Range {
            start,
            end,
            overscan: self.options.overscan,
            count: self.measurements.len(),
        })
    }

    /// Rebuilds any stale measurements and returns the items to render.
    ///
    /// With no pending corrections and unchanged inputs, repeated calls return identical frames.
    pub fn compute(&mut self) -> VirtualFrame<K> {
        self.mounted = true;
        self.flush_measurements();

        let total_size = self.total_size();
        let Some(range) = self.range() else {
            return VirtualFrame {
                items: Vec::new(),
                total_size,
                range: None,
            };
        };

        let measurements = &self.measurements;
        let mut items = Vec::new();
        let mut push = |i: usize| {
            if let Some(m) = measurements.get(i) {
                items.push(VirtualItem::from(m));
            }
        };
        match &self.options.range_extractor {
            Some(extract) => extract(range, &mut push),
            None => default_range_extractor(range, &mut push),
        }

        VirtualFrame {
            items,
            total_size,
            range: Some(range),
        }
    }

    fn mark_dirty(&mut self, index: usize) {
        self.rebuild_from = Some(self.rebuild_from.map_or(index, |cur| cur.min(index)));
    }

    fn flush_measurements(&mut self) {
        let Some(from) = self.rebuild_from.take() else {
            return;
        };
        vdebug!(
            from,
            count = self.options.count,
            "rebuilding measurements"
        );
        rebuild_measurements(
            &mut self.measurements,
            from,
            self.options.count,
            self.options.padding_start,
            &*self.options.estimate_size,
            &*self.options.get_item_key,
            &self.measured_cache,
        );
    }
}
