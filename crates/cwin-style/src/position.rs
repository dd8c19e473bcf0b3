#![forbid(unsafe_code)]

//! Enumerations parsed from theme strings.

use std::str::FromStr;

use crate::StyleError;

/// Where the floating preview window goes.
///
/// The first four variants follow the text cursor; the rest are fixed
/// relative to the candidate bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PopupPosition {
    /// Below the anchor, aligned to its left edge.
    Left,
    /// Above the anchor, aligned to its left edge.
    LeftUp,
    /// Below the anchor, aligned to its right edge.
    Right,
    /// Above the anchor, aligned to its right edge.
    RightUp,
    /// Wherever the user last dragged it.
    Drag,
    /// Bottom-left of the available area.
    #[default]
    Fixed,
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
    // Recognised but placed like `Fixed`.
    TopCenter,
    BottomCenter,
    Center,
}

impl PopupPosition {
    /// Whether this variant tracks the cursor anchor.
    #[inline]
    pub const fn follows_cursor(self) -> bool {
        matches!(self, Self::Left | Self::LeftUp | Self::Right | Self::RightUp)
    }

    /// Follow-cursor variants that open above the anchor.
    #[inline]
    pub const fn opens_upward(self) -> bool {
        matches!(self, Self::LeftUp | Self::RightUp)
    }

    /// Follow-cursor variants aligned to the anchor's right edge.
    #[inline]
    pub const fn anchors_right(self) -> bool {
        matches!(self, Self::Right | Self::RightUp)
    }

    /// Parse a theme value, falling back to `default` on anything unknown.
    pub fn parse_or(value: &str, default: Self) -> Self {
        value.parse().unwrap_or_else(|err: StyleError| {
            tracing::debug!(%err, ?default, "popup position fallback");
            default
        })
    }
}

impl FromStr for PopupPosition {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Self::Left,
            "LEFT_UP" => Self::LeftUp,
            "RIGHT" => Self::Right,
            "RIGHT_UP" => Self::RightUp,
            "DRAG" => Self::Drag,
            "FIXED" => Self::Fixed,
            "BOTTOM_LEFT" => Self::BottomLeft,
            "BOTTOM_RIGHT" => Self::BottomRight,
            "TOP_LEFT" => Self::TopLeft,
            "TOP_RIGHT" => Self::TopRight,
            "TOP_CENTER" => Self::TopCenter,
            "BOTTOM_CENTER" => Self::BottomCenter,
            "CENTER" => Self::Center,
            _ => {
                return Err(StyleError::UnknownValue {
                    field: "layout/position",
                    value: s.to_owned(),
                });
            }
        };
        Ok(pos)
    }
}

/// Whether the preview window can be dragged by its move handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Movable {
    /// Draggable; the dragged position persists across content updates.
    Always,
    #[default]
    Never,
    /// Draggable, but every content update snaps back to the configured
    /// position.
    Once,
}

impl Movable {
    #[inline]
    pub const fn allows_drag(self) -> bool {
        !matches!(self, Self::Never)
    }

    /// Parse leniently; unknown values mean `Never`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Movable {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "always" => Ok(Self::Always),
            "false" | "never" => Ok(Self::Never),
            "once" => Ok(Self::Once),
            _ => Err(StyleError::UnknownValue {
                field: "layout/movable",
                value: s.to_owned(),
            }),
        }
    }
}

/// Horizontal alignment group for a run of composed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// Map a theme `align` value. Unrecognised values align to the start.
    pub fn from_theme(value: &str) -> Self {
        match value.trim() {
            "right" | "opposite" => Self::End,
            "center" => Self::Center,
            _ => Self::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn popup_position_is_case_insensitive() {
        assert_eq!("right_up".parse::<PopupPosition>(), Ok(PopupPosition::RightUp));
        assert_eq!("Left".parse::<PopupPosition>(), Ok(PopupPosition::Left));
    }

    #[test]
    #[traced_test]
    fn popup_position_falls_back() {
        assert_eq!(
            PopupPosition::parse_or("nowhere", PopupPosition::Fixed),
            PopupPosition::Fixed
        );
        assert!("nowhere".parse::<PopupPosition>().is_err());
        assert!(logs_contain("popup position fallback"));
    }

    #[test]
    fn follow_cursor_variants() {
        let follow = [
            PopupPosition::Left,
            PopupPosition::LeftUp,
            PopupPosition::Right,
            PopupPosition::RightUp,
        ];
        for p in follow {
            assert!(p.follows_cursor(), "{p:?}");
        }
        assert!(!PopupPosition::Drag.follows_cursor());
        assert!(!PopupPosition::TopRight.follows_cursor());
        assert!(PopupPosition::RightUp.opens_upward());
        assert!(PopupPosition::RightUp.anchors_right());
        assert!(!PopupPosition::Left.anchors_right());
    }

    #[test]
    fn movable_theme_values() {
        assert_eq!(Movable::parse_lenient("true"), Movable::Always);
        assert_eq!(Movable::parse_lenient("false"), Movable::Never);
        assert_eq!(Movable::parse_lenient("once"), Movable::Once);
        assert_eq!(Movable::parse_lenient("sometimes"), Movable::Never);
        assert!(!Movable::Never.allows_drag());
    }

    #[test]
    fn align_theme_values() {
        assert_eq!(TextAlign::from_theme("opposite"), TextAlign::End);
        assert_eq!(TextAlign::from_theme("right"), TextAlign::End);
        assert_eq!(TextAlign::from_theme("center"), TextAlign::Center);
        assert_eq!(TextAlign::from_theme("normal"), TextAlign::Start);
        assert_eq!(TextAlign::from_theme(""), TextAlign::Start);
    }
}
