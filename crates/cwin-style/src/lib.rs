#![forbid(unsafe_code)]

//! Resolved theme values for the cwin candidate surface.
//!
//! # Role in cwin
//! Theme files are parsed elsewhere. By the time values reach this crate
//! they are plain scalars: pixel sizes, ARGB colors, opaque font handles,
//! booleans, and ordered template descriptors. `cwin-style` gives those
//! values types, defaults, and validation so the layout and compositor
//! crates never deal with stringly-typed configuration.
//!
//! # This crate provides
//! - [`Color`], [`FontId`], [`FontSet`], [`TextStyle`] for paint state.
//! - [`BarStyle`] for the candidate bar and [`WindowStyle`] for the floating
//!   preview window.
//! - [`WindowComponent`] template descriptors and their decoding from
//!   key/value maps.
//! - [`PopupPosition`], [`Movable`], [`TextAlign`] parsed from theme strings.

pub mod bar;
pub mod color;
pub mod component;
pub mod error;
pub mod font;
pub mod position;
pub mod window;

pub use bar::BarStyle;
pub use color::Color;
pub use component::{
    ButtonCondition, ButtonTemplate, CandidateTemplate, CompositionTemplate, Decoration,
    MoveTemplate, WindowComponent,
};
pub use error::StyleError;
pub use font::{FontId, FontSet, TextStyle};
pub use position::{Movable, PopupPosition, TextAlign};
pub use window::{WindowLimits, WindowStyle};

/// Reject negative or non-finite pixel values.
pub(crate) fn check_scalar(field: &'static str, value: f32) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidScalar { field, value })
    }
}
