use alloc::vec::Vec;

/// The computed position of one item along the scroll axis.
///
/// `end == start + size`, and within a measurement sequence each item starts where the previous
/// one ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement<K> {
    pub index: usize,
    pub key: K,
    pub start: f64,
    pub size: f64,
    pub end: f64,
}

/// Inclusive index bounds of the items intersecting the viewport, before overscan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize, // inclusive
    pub overscan: usize,
    pub count: usize,
}

impl Range {
    /// The overscanned bounds `[start - overscan, end + overscan]`, clamped to the item count.
    pub fn overscanned(&self) -> Option<(usize, usize)> {
        if self.count == 0 {
            return None;
        }
        let start = self.start.saturating_sub(self.overscan);
        let end = self
            .end
            .saturating_add(self.overscan)
            .min(self.count - 1);
        (start <= end).then_some((start, end))
    }
}

/// Content-box size of a scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An item the caller must render, in the order it was produced.
///
/// Once the element is laid out, pass [`VirtualItem::measure_ref`] back to
/// [`crate::Virtualizer::report_size`] with the element's real size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem<K> {
    pub index: usize,
    pub key: K,
    pub start: f64,
    pub size: f64,
    pub end: f64,
}

impl<K: Clone> VirtualItem<K> {
    pub fn measure_ref(&self) -> MeasureRef<K> {
        MeasureRef {
            index: self.index,
            key: self.key.clone(),
            start: self.start,
            size: self.size,
        }
    }
}

impl<K: Clone> From<&Measurement<K>> for VirtualItem<K> {
    fn from(m: &Measurement<K>) -> Self {
        Self {
            index: m.index,
            key: m.key.clone(),
            start: m.start,
            size: m.size,
            end: m.end,
        }
    }
}

/// The measurement capability attached to a rendered item.
///
/// It remembers the position and size the item was rendered with, so a later size report can
/// tell whether the item actually changed and whether it sits above the scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureRef<K> {
    pub index: usize,
    pub key: K,
    pub start: f64,
    pub size: f64,
}

/// The result of one [`crate::Virtualizer::compute`] pass.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFrame<K> {
    pub items: Vec<VirtualItem<K>>,
    pub total_size: f64,
    /// Visible bounds before overscan; `None` when nothing is visible.
    pub range: Option<Range>,
}

impl<K> VirtualFrame<K> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size of the spacer rendered before the first item.
    pub fn padding_before(&self) -> f64 {
        self.items.first().map_or(0.0, |it| it.start)
    }

    /// Size of the spacer rendered after the last item.
    pub fn padding_after(&self) -> f64 {
        self.items
            .last()
            .map_or(0.0, |it| (self.total_size - it.end).max(0.0))
    }
}
