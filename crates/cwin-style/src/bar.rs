#![forbid(unsafe_code)]

//! Style for the horizontal candidate bar.

use crate::{Color, FontId, StyleError, TextStyle, check_scalar};

/// Resolved theme values for the candidate bar.
///
/// Sizes are pixels. `comment_height` only contributes to the content height
/// when comments are stacked above the candidate text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarStyle {
    /// Horizontal padding on each side of a cell's text.
    pub padding: f32,
    /// Gap between adjacent cells.
    pub spacing: f32,
    pub candidate: TextStyle,
    pub comment: TextStyle,
    /// Style for the paging arrows.
    pub symbol: TextStyle,
    pub hilited_candidate_color: Color,
    pub hilited_comment_color: Color,
    pub hilited_back_color: Color,
    pub separator_color: Color,
    pub candidate_view_height: f32,
    pub comment_height: f32,
    pub comment_on_top: bool,
    pub show_comment: bool,
    /// Highlight the engine's cursor candidate when nothing is pressed.
    pub candidate_use_cursor: bool,
    pub round_corner: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            padding: 5.0,
            spacing: 0.5,
            candidate: TextStyle::new(FontId::DEFAULT, 20.0, Color::BLACK),
            comment: TextStyle::new(FontId::DEFAULT, 12.0, Color::rgb(0x80, 0x80, 0x80)),
            symbol: TextStyle::new(FontId::DEFAULT, 20.0, Color::rgb(0x60, 0x60, 0x60)),
            hilited_candidate_color: Color::WHITE,
            hilited_comment_color: Color::WHITE,
            hilited_back_color: Color::rgb(0x33, 0x99, 0xFF),
            separator_color: Color::rgb(0xCC, 0xCC, 0xCC),
            candidate_view_height: 28.0,
            comment_height: 12.0,
            comment_on_top: false,
            show_comment: true,
            candidate_use_cursor: true,
            round_corner: 0.0,
        }
    }
}

impl BarStyle {
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn candidate(mut self, style: TextStyle) -> Self {
        self.candidate = style;
        self
    }

    #[must_use]
    pub fn comment(mut self, style: TextStyle) -> Self {
        self.comment = style;
        self
    }

    #[must_use]
    pub fn symbol(mut self, style: TextStyle) -> Self {
        self.symbol = style;
        self
    }

    #[must_use]
    pub fn candidate_view_height(mut self, height: f32) -> Self {
        self.candidate_view_height = height;
        self
    }

    #[must_use]
    pub fn comment_height(mut self, height: f32) -> Self {
        self.comment_height = height;
        self
    }

    #[must_use]
    pub fn comment_on_top(mut self, on_top: bool) -> Self {
        self.comment_on_top = on_top;
        self
    }

    #[must_use]
    pub fn show_comment(mut self, show: bool) -> Self {
        self.show_comment = show;
        self
    }

    #[must_use]
    pub fn candidate_use_cursor(mut self, use_cursor: bool) -> Self {
        self.candidate_use_cursor = use_cursor;
        self
    }

    #[must_use]
    pub fn round_corner(mut self, radius: f32) -> Self {
        self.round_corner = radius;
        self
    }

    #[must_use]
    pub fn hilited_back_color(mut self, color: Color) -> Self {
        self.hilited_back_color = color;
        self
    }

    /// Height of the laid-out content: the candidate row, plus the comment
    /// row when the words are stacked under their comments.
    pub fn content_height(&self, comments_stacked: bool) -> f32 {
        if comments_stacked && self.show_comment && self.comment_on_top {
            self.candidate_view_height + self.comment_height
        } else {
            self.candidate_view_height
        }
    }

    /// Check every pixel value.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_scalar("candidate_padding", self.padding)?;
        check_scalar("candidate_spacing", self.spacing)?;
        check_scalar("candidate_text_size", self.candidate.size)?;
        check_scalar("comment_text_size", self.comment.size)?;
        check_scalar("symbol_text_size", self.symbol.size)?;
        check_scalar("candidate_view_height", self.candidate_view_height)?;
        check_scalar("comment_height", self.comment_height)?;
        check_scalar("round_corner", self.round_corner)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(BarStyle::default().validate(), Ok(()));
    }

    #[test]
    fn negative_padding_rejected() {
        let err = BarStyle::default().padding(-1.0).validate().unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidScalar {
                field: "candidate_padding",
                value: -1.0
            }
        );
    }

    #[test]
    fn nan_spacing_rejected() {
        assert!(BarStyle::default().spacing(f32::NAN).validate().is_err());
    }

    #[test]
    fn content_height_adds_comment_row_only_on_top() {
        let style = BarStyle::default()
            .candidate_view_height(30.0)
            .comment_height(10.0);
        assert_eq!(style.content_height(true), 30.0);
        let stacked = style.clone().comment_on_top(true);
        assert_eq!(stacked.content_height(true), 40.0);
        assert_eq!(stacked.content_height(false), 30.0);
        assert_eq!(stacked.show_comment(false).content_height(true), 30.0);
    }
}
