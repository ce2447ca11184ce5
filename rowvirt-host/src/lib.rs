//! Host bindings for the `rowvirt` engine.
//!
//! `rowvirt` only does the math. This crate connects it to a scrollable container owned by a
//! host UI:
//!
//! - [`RectObserver`] keeps the container's content-box size current
//! - [`ScrollBinding`] publishes the container's scroll offset and scrolls it on request
//! - [`VirtualList`] wires both into a [`rowvirt::Virtualizer`] and routes item size reports
//! - [`Tween`] drives optional smooth scrolling from the host's frame clock
//!
//! The container is abstracted by the [`ScrollContainer`] trait, so the crate stays independent
//! of any particular UI toolkit; [`MemoryContainer`] implements it for headless hosts.
//! Everything is single-threaded: the host calls in from its event loop and each call runs to
//! completion.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod list;
mod memory;
mod rect;
mod scroll;
mod tween;

#[cfg(test)]
mod tests;

pub use container::{
    ContainerId, ListenerId, ListenerOptions, MeasureElement, ScrollContainer, ScrollListener,
};
pub use list::VirtualList;
pub use memory::{MemoryContainer, MemoryElement};
pub use rect::RectObserver;
pub use scroll::{ScrollBinding, ScrollSubscription, ScrollToFn};
pub use tween::{Easing, Tween};
