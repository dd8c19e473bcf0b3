#![forbid(unsafe_code)]

//! cwin public facade crate.
//!
//! Re-exports the common types of the internal crates, the unified
//! [`Error`] model, and [`CandidateSurface`], which drives the candidate bar
//! and the floating preview from engine snapshots.
//!
//! # Example
//!
//! ```
//! use cwin::prelude::*;
//! use web_time::Instant;
//!
//! let mut surface = CandidateSurface::new(
//!     BarStyle::default(),
//!     WindowStyle::default().min_length(2).min_check(1),
//!     RunPainter::new(CellMeasurer::default(), FontSet::NONE),
//! )?;
//!
//! let snapshot = EngineSnapshot {
//!     candidates: vec![CandidateEntry::new("你好"), CandidateEntry::new("你")],
//!     composition: CompositionState::new("ni hao", 0, 0),
//!     raw_input: "nihao".into(),
//!     ..EngineSnapshot::default()
//! };
//! surface.update(&snapshot, Instant::now());
//! assert_eq!(surface.bar_start(), 1);
//! # Ok::<(), cwin::Error>(())
//! ```

pub mod error;
pub mod surface;

// --- Core re-exports -------------------------------------------------------

pub use cwin_core::{
    CandidateEntry, CompositionState, EngineFlags, EngineSnapshot, Orientation, PointF,
    PointerEvent, PointerKind, RectF, SizeF, Transform,
};

// --- Style re-exports ------------------------------------------------------

pub use cwin_style::{
    BarStyle, Color, FontId, FontSet, Movable, PopupPosition, StyleError, TextAlign, TextStyle,
    WindowComponent, WindowStyle,
};

// --- Text re-exports -------------------------------------------------------

pub use cwin_text::{Canvas, CellMeasurer, RecordingCanvas, RunPainter, TextMeasurer};

// --- Layout re-exports -----------------------------------------------------

pub use cwin_layout::{CandidateLayout, CellTarget, HitTester, calc_start_num};

// --- Widget re-exports -----------------------------------------------------

pub use cwin_widgets::{
    AnchorError, BarAction, CandidateBar, ComposedWindow, Compositor, CursorAnchorInfo,
    PopupArea, PopupCommand, PopupController, PopupPositioner, WindowAction,
};

// --- Errors ---------------------------------------------------------------

pub use error::{DegradationAction, Error, Result};

pub use surface::CandidateSurface;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BarAction, BarStyle, CandidateEntry, CandidateSurface, CellMeasurer, CompositionState,
        CursorAnchorInfo, EngineSnapshot, Error, FontSet, PointerEvent, PopupArea, PopupCommand,
        Result, RunPainter, WindowAction, WindowStyle,
    };

    pub use crate::{core, layout, style, text, widgets};
}

pub use cwin_core as core;
pub use cwin_layout as layout;
pub use cwin_style as style;
pub use cwin_text as text;
pub use cwin_widgets as widgets;
