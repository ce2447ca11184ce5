use alloc::vec::Vec;

use crate::{ItemKey, MeasuredCache, Measurement};

/// Rebuilds `measurements[from..count]` in place, keeping `measurements[..from]` untouched.
///
/// Each rebuilt item starts where the previous one ends (or at `padding_start` for index 0) and
/// takes its size from `cache` when its key has been measured, falling back to `estimate_size`.
/// `from` is clamped to both the current length and `count`, so shrinking lists and stale
/// correction indexes are handled without leaving trailing items behind.
pub fn rebuild_measurements<K: ItemKey>(
    measurements: &mut Vec<Measurement<K>>,
    from: usize,
    count: usize,
    padding_start: f64,
    estimate_size: &dyn Fn(usize) -> f64,
    get_item_key: &dyn Fn(usize) -> K,
    cache: &MeasuredCache<K>,
) {
    let from = from.min(measurements.len()).min(count);
    measurements.truncate(from);
    measurements.reserve(count - from);

    let mut start = measurements.last().map_or(padding_start, |m| m.end);
    for index in from..count {
        let key = get_item_key(index);
        let size = cache.get(&key).unwrap_or_else(|| estimate_size(index));
        let end = start + size;
        measurements.push(Measurement {
            index,
            key,
            start,
            size,
            end,
        });
        start = end;
    }
}

/// Total scrollable extent: the last item's end (or `padding_start` when empty) plus
/// `padding_end`.
pub fn total_size<K>(measurements: &[Measurement<K>], padding_start: f64, padding_end: f64) -> f64 {
    measurements.last().map_or(padding_start, |m| m.end) + padding_end
}
