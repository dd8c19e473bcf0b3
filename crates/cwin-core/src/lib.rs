#![forbid(unsafe_code)]

//! Shared vocabulary for the cwin candidate surface.
//!
//! # Role in cwin
//! `cwin-core` holds the types every other crate agrees on: floating-point
//! geometry in screen or view space, the immutable engine snapshot that the
//! external composition engine publishes, pointer events coming back from
//! the host platform, and the debounced scheduler that drives popup
//! repositioning.
//!
//! Nothing here touches a platform UI toolkit. The host renderer owns the
//! actual views and calls into the algorithm crates with these values.

pub mod debounce;
pub mod event;
pub mod geometry;
pub mod snapshot;

pub use debounce::{Debouncer, Ticket};
pub use event::{PointerEvent, PointerKind};
pub use geometry::{PointF, RectF, SizeF, Transform};
pub use snapshot::{
    CandidateEntry, CompositionState, EngineFlags, EngineSnapshot, Orientation,
};
