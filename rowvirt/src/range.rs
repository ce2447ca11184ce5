//! Offset → index lookup over a measurement sequence.
//!
//! Item sizes are not uniform and not known ahead of time, so the visible window is found in two
//! phases: a binary seek over item starts for the first visible item, then a linear scan forward
//! to the last item that still begins inside the viewport.

use crate::Measurement;

/// Binary search over a non-decreasing sequence of values in `[low, high]`.
///
/// Returns the index of an exact match; otherwise the last index whose value is below `value`.
/// When `value` precedes every element, returns `0`.
pub fn find_nearest_binary_search(
    low: usize,
    high: usize,
    value_at: impl Fn(usize) -> f64,
    value: f64,
) -> usize {
    // Half-open `[low, high)` internally to stay in unsigned arithmetic.
    let mut lo = low;
    let mut hi = high.saturating_add(1);
    while lo < hi {
        let middle = lo + (hi - lo) / 2;
        let current = value_at(middle);
        if current < value {
            lo = middle + 1;
        } else if current > value {
            hi = middle;
        } else {
            return middle;
        }
    }
    lo.saturating_sub(1)
}

/// Computes the inclusive `(start, end)` indexes of the items intersecting
/// `[scroll_offset, scroll_offset + outer_size)`.
///
/// Returns `None` when there are no items or the viewport has no usable size (zero, negative or
/// not finite). A non-finite scroll offset is treated as `0`.
pub fn calculate_range<K>(
    measurements: &[Measurement<K>],
    scroll_offset: f64,
    outer_size: f64,
) -> Option<(usize, usize)> {
    let last = measurements.len().checked_sub(1)?;
    if !outer_size.is_finite() || outer_size <= 0.0 {
        return None;
    }
    let scroll_offset = if scroll_offset.is_finite() {
        scroll_offset
    } else {
        0.0
    };

    let start = find_nearest_binary_search(0, last, |i| measurements[i].start, scroll_offset);
    let viewport_end = scroll_offset + outer_size;
    let mut end = start;
    while end < last && measurements[end].end < viewport_end {
        end += 1;
    }
    Some((start, end))
}
