#![forbid(unsafe_code)]

//! Stateful surfaces of the cwin candidate UI.
//!
//! # Role in cwin
//! `cwin-widgets` sits on top of the pure layout and text crates and owns
//! the state that lives between engine updates: the candidate bar's page
//! and pressed cell, the preview window's drag state, and the popup's
//! placement and debounce timer. None of it touches a platform toolkit;
//! hosts feed in snapshots, anchors, and pointer events, and get back
//! actions, draw calls, and window commands.
//!
//! # This crate provides
//! - [`Compositor`] / [`ComposedWindow`]: theme templates to a styled
//!   buffer.
//! - [`WindowTouch`]: taps and drags on the preview window.
//! - [`CandidateBar`]: bar page state, touch dispatch, and painting.
//! - [`PopupPositioner`] / [`PopupController`]: preview window placement.

pub mod anchor;
pub mod candidate_bar;
pub mod compositor;
pub mod error;
pub mod popup;
pub mod span;
pub mod window_touch;

pub use anchor::{ComposingBounds, CursorAnchorInfo, InsertionMarker};
pub use candidate_bar::{BarAction, CandidateBar, DEFAULT_LONG_PRESS};
pub use compositor::{CommandLabels, ComposedWindow, Compositor, NoCommandLabels};
pub use error::AnchorError;
pub use popup::{
    PlacementMode, PopupArea, PopupCommand, PopupController, PopupPlacement, PopupPositioner,
};
pub use span::{CandidatePart, ClickTarget, SpanKind, StyleSpan};
pub use window_touch::{CARET_MARKER, WindowAction, WindowTouch};
