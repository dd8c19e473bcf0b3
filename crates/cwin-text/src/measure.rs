#![forbid(unsafe_code)]

//! The text measurement seam.
//!
//! Real pixel widths come from the host's font engine. Layout code only
//! talks to [`TextMeasurer`], so it runs headless in tests and benches with
//! [`CellMeasurer`], a deterministic stand-in that derives widths from
//! Unicode display columns.

use cwin_style::FontId;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Vertical font metrics at a given size.
///
/// Both values are positive distances from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    #[inline]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Baseline that vertically centers a line in a box of `height` whose
    /// top is at `top`.
    #[inline]
    pub fn centered_baseline(&self, top: f32, height: f32) -> f32 {
        top + (height - self.height()) * 0.5 + self.ascent
    }
}

/// Measures single-typeface runs.
///
/// Implementations must be pure: the same `(text, font, size)` always
/// yields the same width.
pub trait TextMeasurer {
    /// Advance width of `text` set in `font` at `size` pixels.
    fn measure_run(&self, text: &str, font: FontId, size: f32) -> f32;

    /// Vertical metrics of `font` at `size` pixels.
    fn metrics(&self, _font: FontId, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: size * 0.8,
            descent: size * 0.2,
        }
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    #[inline]
    fn measure_run(&self, text: &str, font: FontId, size: f32) -> f32 {
        (**self).measure_run(text, font, size)
    }

    #[inline]
    fn metrics(&self, font: FontId, size: f32) -> FontMetrics {
        (**self).metrics(font, size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    #[inline]
    fn measure_run(&self, text: &str, font: FontId, size: f32) -> f32 {
        (**self).measure_run(text, font, size)
    }

    #[inline]
    fn metrics(&self, font: FontId, size: f32) -> FontMetrics {
        (**self).metrics(font, size)
    }
}

/// Width = display columns × `size` × `em_per_column`.
///
/// Narrow characters take one column, East Asian wide characters two, so
/// with the default half-em column a CJK ideograph is exactly one em wide.
/// Columns are counted per extended grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasurer {
    pub em_per_column: f32,
}

impl Default for CellMeasurer {
    fn default() -> Self {
        Self { em_per_column: 0.5 }
    }
}

impl CellMeasurer {
    /// Display columns of `text`.
    pub fn columns(text: &str) -> usize {
        text.graphemes(true).map(UnicodeWidthStr::width).sum()
    }
}

impl TextMeasurer for CellMeasurer {
    fn measure_run(&self, text: &str, _font: FontId, size: f32) -> f32 {
        Self::columns(text) as f32 * size * self.em_per_column
    }
}
