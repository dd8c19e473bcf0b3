#![forbid(unsafe_code)]

use std::fmt;

/// A cursor anchor update that cannot be applied.
///
/// Every variant means "keep the previous anchor": a stale placement is
/// preferred over one computed from partial geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorError {
    /// The composing range is active but the host has no bounds for its
    /// first or last character yet.
    ComposingBoundsUnavailable,
    /// Neither composing bounds nor an insertion marker were reported.
    InsertionMarkerUnavailable,
    /// The coordinate matrix produced a non-finite rectangle.
    NonFiniteTransform,
}

impl fmt::Display for AnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComposingBoundsUnavailable => {
                write!(f, "composing range bounds unavailable")
            }
            Self::InsertionMarkerUnavailable => write!(f, "no insertion marker reported"),
            Self::NonFiniteTransform => write!(f, "anchor transform produced non-finite bounds"),
        }
    }
}

impl std::error::Error for AnchorError {}
