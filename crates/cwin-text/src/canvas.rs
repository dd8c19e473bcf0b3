#![forbid(unsafe_code)]

//! The drawing seam.
//!
//! Painters issue primitive draw calls through [`Canvas`]; the host maps them
//! onto its native surface. [`RecordingCanvas`] captures calls as
//! [`DrawOp`]s for headless rendering and assertions.

use cwin_core::RectF;
use cwin_style::{Color, FontId};

/// Destination for draw calls.
pub trait Canvas {
    fn fill_rect(&mut self, rect: RectF, color: Color);

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color);

    /// Draw `text` left-aligned at `x` with its baseline at `baseline_y`.
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline_y: f32,
        font: FontId,
        size: f32,
        color: Color,
    );
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: RectF,
        color: Color,
    },
    RoundRect {
        rect: RectF,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        baseline_y: f32,
        font: FontId,
        size: f32,
        color: Color,
    },
}

/// Canvas that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded text calls as `(text, x)` pairs.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, x, .. } => Some((text.as_str(), *x)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        self.ops.push(DrawOp::RoundRect {
            rect,
            radius,
            color,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline_y: f32,
        font: FontId,
        size: f32,
        color: Color,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            x,
            baseline_y,
            font,
            size,
            color,
        });
    }
}
