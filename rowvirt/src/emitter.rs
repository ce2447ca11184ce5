use crate::Range;

/// Helper to build correct range extractors without allocations.
///
/// It enforces the extractor contract:
/// - Out-of-bounds indexes are ignored (and debug-asserted).
/// - Duplicates are ignored.
/// - Out-of-order indexes are ignored (and debug-asserted).
pub struct IndexEmitter<'a> {
    range: Range,
    last: Option<usize>,
    emit: &'a mut dyn FnMut(usize),
}

impl<'a> IndexEmitter<'a> {
    pub fn new(range: Range, emit: &'a mut dyn FnMut(usize)) -> Self {
        Self {
            range,
            last: None,
            emit,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn emit(&mut self, index: usize) {
        if index >= self.range.count {
            vwarn!(
                index,
                count = self.range.count,
                "IndexEmitter: out-of-bounds index"
            );
            debug_assert!(
                index < self.range.count,
                "IndexEmitter: out-of-bounds index (i={index}, count={})",
                self.range.count
            );
            return;
        }

        if let Some(prev) = self.last {
            if index == prev {
                return;
            }
            if index < prev {
                vwarn!(
                    prev,
                    next = index,
                    "IndexEmitter: indexes must be emitted in ascending order"
                );
                debug_assert!(
                    index > prev,
                    "IndexEmitter: indexes must be emitted in ascending order (prev={prev}, next={index})"
                );
                return;
            }
        }

        self.last = Some(index);
        (self.emit)(index);
    }

    /// Emits `start..=end`, clamped to the item count.
    pub fn emit_inclusive(&mut self, start: usize, end: usize) {
        if self.range.count == 0 {
            return;
        }
        let end = end.min(self.range.count - 1);
        for i in start..=end {
            self.emit(i);
        }
    }

    pub fn emit_visible(&mut self) {
        self.emit_inclusive(self.range.start, self.range.end);
    }

    pub fn emit_overscanned(&mut self) {
        if let Some((start, end)) = self.range.overscanned() {
            self.emit_inclusive(start, end);
        }
    }
}

/// The default extractor: every index in `[start - overscan, end + overscan]`, ascending.
pub fn default_range_extractor(range: Range, emit: &mut dyn FnMut(usize)) {
    IndexEmitter::new(range, emit).emit_overscanned();
}
