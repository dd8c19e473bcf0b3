#![forbid(unsafe_code)]

//! Unified cwin error model and graceful degradation.
//!
//! # Design Principles
//!
//! 1. **Missing input is not an error.** Empty compositions, empty candidate
//!    lists, and absent comments degrade inside the components themselves.
//! 2. **Domain errors stay typed.** Style decoding raises [`StyleError`] and
//!    anchor resolution raises [`AnchorError`]; [`Error`] wraps both so a
//!    host can handle them in one place.
//! 3. **Every error maps to a [`DegradationAction`].** The surface keeps
//!    running; the action tells the host what to do with the failed input.

use std::fmt;

use cwin_style::StyleError;
use cwin_widgets::AnchorError;

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error for the candidate surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A theme value could not be decoded or validated.
    Style(StyleError),
    /// A cursor anchor could not be turned into screen geometry.
    Anchor(AnchorError),
}

/// Convenience alias used across the facade.
pub type Result<T> = std::result::Result<T, Error>;

// ── Degradation ─────────────────────────────────────────────────────────

/// What the surface does instead of applying a failed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegradationAction {
    /// Ignore the bad value and use the theme default for that field.
    UseDefault,
    /// Drop this update; the next one will be computed from scratch.
    SkipUpdate,
    /// Hide the floating window until a usable update arrives.
    HideWindow,
    /// Keep the previously applied style in place.
    KeepPrevious,
}

impl Error {
    /// Map this error to the action the surface should take.
    pub fn degradation(&self) -> DegradationAction {
        match self {
            Self::Style(StyleError::UnknownValue { .. }) => DegradationAction::UseDefault,
            Self::Style(StyleError::InvalidNumber { .. }) => DegradationAction::UseDefault,
            Self::Style(StyleError::InvalidScalar { .. }) => DegradationAction::KeepPrevious,

            Self::Anchor(AnchorError::ComposingBoundsUnavailable) => {
                DegradationAction::SkipUpdate
            }
            Self::Anchor(AnchorError::InsertionMarkerUnavailable) => {
                DegradationAction::SkipUpdate
            }
            Self::Anchor(AnchorError::NonFiniteTransform) => DegradationAction::HideWindow,
        }
    }

    /// Short label for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Style(_) => "style",
            Self::Anchor(_) => "anchor",
        }
    }

    /// Whether the surface can keep showing the window after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.degradation(), DegradationAction::HideWindow)
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(err) => write!(f, "style: {err}"),
            Self::Anchor(err) => write!(f, "anchor: {err}"),
        }
    }
}

impl fmt::Display for DegradationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UseDefault => "use-default",
            Self::SkipUpdate => "skip-update",
            Self::HideWindow => "hide-window",
            Self::KeepPrevious => "keep-previous",
        })
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(err) => Some(err),
            Self::Anchor(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<StyleError> for Error {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

impl From<AnchorError> for Error {
    fn from(err: AnchorError) -> Self {
        Self::Anchor(err)
    }
}
