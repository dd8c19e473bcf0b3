#![forbid(unsafe_code)]

//! Cursor anchor geometry reported by the host.
//!
//! While composing, the host reports the bounds of the first and last
//! composing characters; otherwise it reports the insertion marker (a
//! vertical caret line). Either comes in view coordinates together with the
//! matrix that maps them to screen space.

use cwin_core::{RectF, Transform};

use crate::error::AnchorError;

/// Bounds of the composing range's end characters.
///
/// Either side may be missing while the host is mid-update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComposingBounds {
    pub first_char: Option<RectF>,
    pub last_char: Option<RectF>,
}

/// The caret line: one x position between `top` and `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionMarker {
    pub horizontal: f32,
    pub top: f32,
    pub bottom: f32,
}

/// One cursor anchor update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorAnchorInfo {
    /// Present while a composing range exists.
    pub composing: Option<ComposingBounds>,
    pub insertion_marker: Option<InsertionMarker>,
    /// View-to-screen matrix.
    pub matrix: Transform,
}

impl CursorAnchorInfo {
    /// Anchor from an insertion marker only.
    pub fn caret(marker: InsertionMarker, matrix: Transform) -> Self {
        Self {
            composing: None,
            insertion_marker: Some(marker),
            matrix,
        }
    }

    /// Anchor from the composing range's end characters.
    pub fn composing(first_char: RectF, last_char: RectF, matrix: Transform) -> Self {
        Self {
            composing: Some(ComposingBounds {
                first_char: Some(first_char),
                last_char: Some(last_char),
            }),
            insertion_marker: None,
            matrix,
        }
    }

    /// The anchor rectangle in screen coordinates.
    ///
    /// With a composing range, both end characters must have bounds; a
    /// half-reported range is an error rather than a guess. Without one,
    /// the insertion marker becomes a zero-width rectangle.
    pub fn screen_rect(&self) -> Result<RectF, AnchorError> {
        let local = match self.composing {
            Some(ComposingBounds {
                first_char: Some(first),
                last_char: Some(last),
            }) => first.union(&last),
            Some(_) => return Err(AnchorError::ComposingBoundsUnavailable),
            None => {
                let m = self
                    .insertion_marker
                    .ok_or(AnchorError::InsertionMarkerUnavailable)?;
                RectF::vertical_line(m.horizontal, m.top, m.bottom)
            }
        };
        let rect = self.matrix.map_rect(&local);
        if rect.is_finite() {
            Ok(rect)
        } else {
            Err(AnchorError::NonFiniteTransform)
        }
    }
}
