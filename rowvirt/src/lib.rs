//! A headless row virtualization engine.
//!
//! Given an item count, a size estimator, and the viewport's size and scroll offset, this crate
//! computes which items intersect the viewport (plus overscan), where each of them starts, and
//! the total scrollable extent a spacer must reserve so native scrollbars reflect the whole
//! (estimated) list. Rendered items report their real size back, replacing estimates.
//!
//! It is UI-agnostic. A host layer (see the `rowvirt-host` crate) is expected to provide:
//! - the viewport size (container height)
//! - the scroll offset
//! - the rendered size of each item once it is laid out
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod emitter;
mod measurement;
mod options;
mod range;
mod types;
mod virtualizer;


pub use cache::{ItemKey, MeasuredCache};
pub use emitter::{IndexEmitter, default_range_extractor};
pub use measurement::{rebuild_measurements, total_size};
pub use options::{
    DEFAULT_ESTIMATE_SIZE, EstimateSize, GetItemKey, RangeExtractor, VirtualizerOptions,
};
pub use range::{calculate_range, find_nearest_binary_search};
pub use types::{MeasureRef, Measurement, Range, Rect, VirtualFrame, VirtualItem};
pub use virtualizer::Virtualizer;
