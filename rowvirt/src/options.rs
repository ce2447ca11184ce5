use alloc::sync::Arc;

use crate::{Range, Rect};

/// Supplies a provisional size for an item before its rendered size is known.
///
/// Identity matters: replacing the estimator with a different `Arc` invalidates every measured
/// size (see [`crate::Virtualizer::set_options`]).
pub type EstimateSize = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Maps an index to the key its measured size is cached under.
pub type GetItemKey<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

/// A callback that emits the indexes to render for a given visible range.
///
/// Instead of returning a `Vec`, the extractor receives an `emit` callback, so custom selections
/// (pinned header rows, sticky sections) can be built without intermediate allocations.
///
/// Contract:
/// - `emit(i)` must be called with `i < range.count`.
/// - The emitted indexes must be sorted ascending; duplicates are allowed but ignored.
///
/// Tip: use [`crate::IndexEmitter`] to enforce the contract.
pub type RangeExtractor = Arc<dyn Fn(Range, &mut dyn FnMut(usize)) + Send + Sync>;

/// The estimate used when none is supplied.
pub const DEFAULT_ESTIMATE_SIZE: f64 = 50.0;

/// Configuration for [`crate::Virtualizer`].
///
/// Cheap to clone: closures live in `Arc`s, so a host can tweak a field and call
/// `Virtualizer::set_options` without reallocating them.
pub struct VirtualizerOptions<K = usize> {
    /// Number of items in the list.
    pub count: usize,
    pub estimate_size: EstimateSize,
    pub get_item_key: GetItemKey<K>,
    /// Optional index selection hook. Defaults to [`crate::default_range_extractor`].
    pub range_extractor: Option<RangeExtractor>,
    /// Extra items rendered on each side of the visible range.
    pub overscan: usize,
    /// Space before the first item.
    pub padding_start: f64,
    /// Space after the last item.
    pub padding_end: f64,
    /// Container size assumed until the first real read.
    pub initial_rect: Option<Rect>,
}

impl<K> Clone for VirtualizerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            estimate_size: Arc::clone(&self.estimate_size),
            get_item_key: Arc::clone(&self.get_item_key),
            range_extractor: self.range_extractor.clone(),
            overscan: self.overscan,
            padding_start: self.padding_start,
            padding_end: self.padding_end,
            initial_rect: self.initial_rect,
        }
    }
}

impl VirtualizerOptions<usize> {
    /// Options for a list keyed by index, using the default estimate for every item.
    pub fn new(count: usize) -> Self {
        Self::new_with_key(count, |_| DEFAULT_ESTIMATE_SIZE, |i| i)
    }
}

impl<K> VirtualizerOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the record at index `i` so that
    /// measured sizes follow records when the list is filtered or reordered.
    pub fn new_with_key(
        count: usize,
        estimate_size: impl Fn(usize) -> f64 + Send + Sync + 'static,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            estimate_size: Arc::new(estimate_size),
            get_item_key: Arc::new(get_item_key),
            range_extractor: None,
            overscan: 1,
            padding_start: 0.0,
            padding_end: 0.0,
            initial_rect: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_estimate_size(
        mut self,
        estimate_size: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.estimate_size = Arc::new(estimate_size);
        self
    }

    /// Shares an existing estimator, keeping its identity.
    pub fn with_shared_estimate_size(mut self, estimate_size: EstimateSize) -> Self {
        self.estimate_size = estimate_size;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_range_extractor(
        mut self,
        range_extractor: Option<impl Fn(Range, &mut dyn FnMut(usize)) + Send + Sync + 'static>,
    ) -> Self {
        self.range_extractor = range_extractor.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_padding(mut self, padding_start: f64, padding_end: f64) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }
}

impl<K> core::fmt::Debug for VirtualizerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualizerOptions")
            .field("count", &self.count)
            .field("overscan", &self.overscan)
            .field("padding_start", &self.padding_start)
            .field("padding_end", &self.padding_end)
            .field("initial_rect", &self.initial_rect)
            .field("has_range_extractor", &self.range_extractor.is_some())
            .finish_non_exhaustive()
    }
}
