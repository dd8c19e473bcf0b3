#![forbid(unsafe_code)]

//! Styled ranges over a composed text buffer.
//!
//! A [`StyleSpan`] tags a half-open `char` range with an alignment group and
//! a [`SpanKind`]. The kind carries everything the renderer needs for that
//! range: typeface, size, colors, and an optional click target. Spans are
//! appended in buffer order and never overlap.

use std::ops::Range;

use cwin_style::{Color, TextAlign, TextStyle};

/// Which part of a candidate entry a span covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CandidatePart {
    Label,
    Text,
    Comment,
}

/// Payload of a [`StyleSpan`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SpanKind {
    /// Literal decoration text (`start`, `end`, `sep`, line breaks).
    Decoration,
    /// Pre-edit text. `highlighted` marks the selection sub-range.
    Composition {
        style: TextStyle,
        back: Option<Color>,
        letter_spacing: Option<f32>,
        highlighted: bool,
    },
    /// One part of candidate `index` (absolute engine index).
    Candidate {
        index: usize,
        part: CandidatePart,
        style: TextStyle,
        /// Foreground used while the span is pressed or engine-highlighted.
        hilited_color: Color,
        hilited_back: Color,
        highlighted: bool,
    },
    /// Clickable key command.
    Button {
        command: String,
        style: TextStyle,
        back: Color,
    },
    /// Drag handle for moving the window.
    MoveHandle { style: TextStyle },
}

/// What tapping a span should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<'a> {
    Candidate(usize),
    Command(&'a str),
}

/// A styled `char` range in a composed buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub align: TextAlign,
    pub kind: SpanKind,
}

impl StyleSpan {
    #[inline]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Text style of the span, if it carries one.
    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.kind {
            SpanKind::Decoration => None,
            SpanKind::Composition { style, .. }
            | SpanKind::Candidate { style, .. }
            | SpanKind::Button { style, .. }
            | SpanKind::MoveHandle { style } => Some(style),
        }
    }

    /// Effective foreground color, taking the highlight into account.
    pub fn foreground(&self) -> Option<Color> {
        match &self.kind {
            SpanKind::Candidate {
                style,
                hilited_color,
                highlighted,
                ..
            } => Some(if *highlighted { *hilited_color } else { style.color }),
            _ => self.text_style().map(|s| s.color),
        }
    }

    /// Effective background color, if any.
    pub fn background(&self) -> Option<Color> {
        match &self.kind {
            SpanKind::Composition { back, .. } => *back,
            SpanKind::Candidate {
                hilited_back,
                highlighted: true,
                ..
            } => Some(*hilited_back),
            SpanKind::Button { back, .. } => Some(*back),
            _ => None,
        }
    }

    pub fn click_target(&self) -> Option<ClickTarget<'_>> {
        match &self.kind {
            SpanKind::Candidate { index, .. } => Some(ClickTarget::Candidate(*index)),
            SpanKind::Button { command, .. } => Some(ClickTarget::Command(command)),
            _ => None,
        }
    }
}
