#![forbid(unsafe_code)]

//! Run-by-run measurement and drawing.
//!
//! [`RunPainter`] pairs a [`TextMeasurer`] with the theme's override
//! [`FontSet`]. Measuring and drawing share one segmentation pass each, so
//! the width used for layout and hit-testing is exactly the advance the pen
//! travels when the same string is painted.
//!
//! # Usage
//!
//! ```
//! use cwin_style::{FontId, FontSet, TextStyle};
//! use cwin_text::{CellMeasurer, RecordingCanvas, RunPainter};
//!
//! let painter = RunPainter::new(CellMeasurer::default(), FontSet::NONE.latin(FontId(1)));
//! let style = TextStyle::default().with_size(20.0);
//! assert_eq!(painter.measure("ab你", &style), 40.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! painter.draw(&mut canvas, "ab你", 100.0, 30.0, &style);
//! let drawn: Vec<_> = canvas.texts().collect();
//! assert_eq!(drawn, vec![("ab", 80.0), ("你", 100.0)]);
//! ```

use cwin_style::{FontSet, TextStyle};
use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::measure::{FontMetrics, TextMeasurer};
use crate::segment::{GlyphRun, GlyphRuns, segment};

/// Measures and draws strings whose codepoints may need different typefaces.
#[derive(Debug, Clone)]
pub struct RunPainter<M> {
    measurer: M,
    fonts: FontSet,
}

impl<M: TextMeasurer> RunPainter<M> {
    pub fn new(measurer: M, fonts: FontSet) -> Self {
        Self { measurer, fonts }
    }

    #[inline]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    #[inline]
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    #[inline]
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Swap the override typefaces.
    pub fn set_fonts(&mut self, fonts: FontSet) {
        self.fonts = fonts;
    }

    /// Total advance of `text`: the sum of its runs' widths.
    pub fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        segment(text, style.font, &self.fonts)
            .iter()
            .map(|run| self.run_width(text, run, style))
            .sum()
    }

    /// Vertical metrics of the style's default typeface.
    pub fn metrics(&self, style: &TextStyle) -> FontMetrics {
        self.measurer.metrics(style.font, style.size)
    }

    /// Draw `text` horizontally centered on `center_x`. Returns the width.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        center_x: f32,
        baseline_y: f32,
        style: &TextStyle,
    ) -> f32 {
        let (runs, widths, total) = self.measured_runs(text, style);
        self.paint_runs(canvas, text, &runs, &widths, center_x - total * 0.5, baseline_y, style);
        total
    }

    /// Draw `text` starting at `left`. Returns the width.
    pub fn draw_from<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        left: f32,
        baseline_y: f32,
        style: &TextStyle,
    ) -> f32 {
        let (runs, widths, total) = self.measured_runs(text, style);
        self.paint_runs(canvas, text, &runs, &widths, left, baseline_y, style);
        total
    }

    #[inline]
    fn run_width(&self, text: &str, run: &GlyphRun, style: &TextStyle) -> f32 {
        self.measurer
            .measure_run(run.text(text), run.font, style.size)
    }

    fn measured_runs(
        &self,
        text: &str,
        style: &TextStyle,
    ) -> (GlyphRuns, SmallVec<[f32; 4]>, f32) {
        let runs = segment(text, style.font, &self.fonts);
        let widths: SmallVec<[f32; 4]> = runs
            .iter()
            .map(|run| self.run_width(text, run, style))
            .collect();
        let total = widths.iter().sum();
        (runs, widths, total)
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_runs<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        runs: &[GlyphRun],
        widths: &[f32],
        left: f32,
        baseline_y: f32,
        style: &TextStyle,
    ) {
        let mut x = left;
        for (run, width) in runs.iter().zip(widths) {
            canvas.draw_text(
                run.text(text),
                x,
                baseline_y,
                run.font,
                style.size,
                style.color,
            );
            x += width;
        }
    }
}
