#![forbid(unsafe_code)]

//! Font handles and paint state.

use crate::Color;

/// Opaque identifier for a typeface.
///
/// The mapping from `FontId` to actual font data belongs to the host
/// renderer; this layer only compares and forwards handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FontId(pub u32);

impl FontId {
    /// The platform default typeface.
    pub const DEFAULT: Self = Self(0);
}

/// Optional override typefaces used by glyph segmentation.
///
/// `latin` covers codepoints below U+2E80; `han_ext` covers supplementary
/// planes (CJK Extension B and beyond).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontSet {
    pub latin: Option<FontId>,
    pub han_ext: Option<FontId>,
}

impl FontSet {
    /// No overrides: every run uses the caller's default typeface.
    pub const NONE: Self = Self {
        latin: None,
        han_ext: None,
    };

    #[must_use]
    pub fn latin(mut self, font: FontId) -> Self {
        self.latin = Some(font);
        self
    }

    #[must_use]
    pub fn han_ext(mut self, font: FontId) -> Self {
        self.han_ext = Some(font);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.latin.is_none() && self.han_ext.is_none()
    }
}

/// Typeface, size, and color for one text role.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font: FontId, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }

    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(FontId::DEFAULT, 16.0, Color::BLACK)
    }
}
