#![forbid(unsafe_code)]

//! Style for the floating preview window.

use cwin_core::Orientation;

use crate::{
    CandidateTemplate, Color, CompositionTemplate, Decoration, FontId, Movable, PopupPosition,
    StyleError, TextStyle, WindowComponent, check_scalar,
};

/// Resolved theme values for the floating preview window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowStyle {
    /// Pre-edit text.
    pub text: TextStyle,
    pub label: TextStyle,
    pub candidate: TextStyle,
    pub comment: TextStyle,
    /// Button and move-handle labels.
    pub key: TextStyle,
    pub hilited_text_color: Color,
    pub hilited_back_color: Color,
    pub hilited_candidate_color: Color,
    pub hilited_candidate_back_color: Color,
    pub hilited_label_color: Color,
    pub hilited_comment_color: Color,
    pub back_color: Color,
    pub key_back_color: Color,

    /// Hard cap on candidates shown in the window.
    pub max_entries: usize,
    /// Candidates shorter than this (in chars) do not warrant a preview.
    pub min_length: usize,
    /// How many leading candidates to look at for a long-enough one.
    pub min_check: usize,
    /// Wrap when a line would exceed this many chars. Zero disables.
    pub max_length: usize,
    /// Force a line break after each of the first N candidates (portrait).
    pub sticky_lines: usize,
    pub sticky_lines_land: usize,
    /// Skip short candidates instead of stopping at the first one.
    pub all_phrases: bool,

    pub movable: Movable,
    pub position: PopupPosition,
    /// Horizontal gap to the edges of the available area.
    pub horizontal_margin: f32,
    /// Vertical gap to the edges, and between the anchor and the window.
    pub vertical_margin: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub line_spacing: f32,
    pub line_spacing_multiplier: f32,
    pub round_corner: f32,

    pub components: Vec<WindowComponent>,
    pub toolbar_components: Vec<WindowComponent>,
}

impl Default for WindowStyle {
    fn default() -> Self {
        let text = TextStyle::new(FontId::DEFAULT, 16.0, Color::BLACK);
        Self {
            text,
            label: text.with_color(Color::rgb(0x80, 0x80, 0x80)),
            candidate: text,
            comment: TextStyle::new(FontId::DEFAULT, 12.0, Color::rgb(0x80, 0x80, 0x80)),
            key: TextStyle::new(FontId::DEFAULT, 16.0, Color::rgb(0x60, 0x60, 0x60)),
            hilited_text_color: Color::BLACK,
            hilited_back_color: Color::rgb(0xDD, 0xDD, 0xDD),
            hilited_candidate_color: Color::WHITE,
            hilited_candidate_back_color: Color::rgb(0x33, 0x99, 0xFF),
            hilited_label_color: Color::WHITE,
            hilited_comment_color: Color::WHITE,
            back_color: Color::WHITE,
            key_back_color: Color::TRANSPARENT,
            max_entries: 30,
            min_length: 0,
            min_check: 0,
            max_length: 0,
            sticky_lines: 0,
            sticky_lines_land: 0,
            all_phrases: false,
            movable: Movable::Never,
            position: PopupPosition::Fixed,
            horizontal_margin: 0.0,
            vertical_margin: 0.0,
            min_width: 0.0,
            max_width: f32::MAX,
            min_height: 0.0,
            max_height: f32::MAX,
            line_spacing: 0.0,
            line_spacing_multiplier: 1.0,
            round_corner: 0.0,
            components: vec![
                WindowComponent::Composition(CompositionTemplate::default()),
                WindowComponent::Candidates(CandidateTemplate {
                    decoration: Decoration {
                        start: "\n".to_owned(),
                        ..Decoration::default()
                    },
                    label: Some("%s.".to_owned()),
                    comment: Some(" %s".to_owned()),
                    sep: " ".to_owned(),
                    ..CandidateTemplate::default()
                }),
            ],
            toolbar_components: Vec::new(),
        }
    }
}

impl WindowStyle {
    #[must_use]
    pub fn max_entries(mut self, n: usize) -> Self {
        self.max_entries = n;
        self
    }

    #[must_use]
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    #[must_use]
    pub fn min_check(mut self, n: usize) -> Self {
        self.min_check = n;
        self
    }

    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = n;
        self
    }

    #[must_use]
    pub fn sticky_lines(mut self, portrait: usize, landscape: usize) -> Self {
        self.sticky_lines = portrait;
        self.sticky_lines_land = landscape;
        self
    }

    #[must_use]
    pub fn all_phrases(mut self, all: bool) -> Self {
        self.all_phrases = all;
        self
    }

    #[must_use]
    pub fn movable(mut self, movable: Movable) -> Self {
        self.movable = movable;
        self
    }

    #[must_use]
    pub fn position(mut self, position: PopupPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn margins(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_margin = horizontal;
        self.vertical_margin = vertical;
        self
    }

    #[must_use]
    pub fn width_range(mut self, min: f32, max: f32) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    #[must_use]
    pub fn height_range(mut self, min: f32, max: f32) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    #[must_use]
    pub fn components(mut self, components: Vec<WindowComponent>) -> Self {
        self.components = components;
        self
    }

    #[must_use]
    pub fn toolbar_components(mut self, components: Vec<WindowComponent>) -> Self {
        self.toolbar_components = components;
        self
    }

    /// The sticky-line threshold for the current orientation.
    pub fn sticky_lines_for(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Portrait => self.sticky_lines,
            Orientation::Landscape => self.sticky_lines_land,
        }
    }

    /// Size limits for the window on a display of the given size.
    pub fn limits(&self, display_width: f32, display_height: f32) -> WindowLimits {
        let max_width = (self.max_width.min(display_width) - 2.0 * self.horizontal_margin).max(0.0);
        let max_height = self.max_height.min(display_height).max(0.0);
        WindowLimits {
            min_width: self.min_width.min(max_width),
            max_width,
            min_height: self.min_height.min(max_height),
            max_height,
        }
    }

    /// Check every pixel value.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_scalar("text_size", self.text.size)?;
        check_scalar("label_text_size", self.label.size)?;
        check_scalar("candidate_text_size", self.candidate.size)?;
        check_scalar("comment_text_size", self.comment.size)?;
        check_scalar("key_text_size", self.key.size)?;
        check_scalar("layout/real_margin", self.horizontal_margin)?;
        check_scalar("layout/spacing", self.vertical_margin)?;
        check_scalar("layout/min_width", self.min_width)?;
        check_scalar("layout/min_height", self.min_height)?;
        check_scalar("layout/line_spacing", self.line_spacing)?;
        check_scalar("layout/line_spacing_multiplier", self.line_spacing_multiplier)?;
        check_scalar("layout/round_corner", self.round_corner)?;
        // f32::MAX means "unbounded" and is finite.
        check_scalar("layout/max_width", self.max_width)?;
        check_scalar("layout/max_height", self.max_height)?;
        Ok(())
    }
}

/// Effective size bounds for the floating window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLimits {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl WindowLimits {
    /// Clamp a measured content size into the limits.
    pub fn clamp(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}
