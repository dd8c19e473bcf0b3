#![forbid(unsafe_code)]

//! ARGB colors as resolved from the theme.

/// A packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn packs_channels() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56), Color(0xFF12_3456));
        assert_eq!(Color::argb(0x80, 0, 0, 0).alpha(), 0x80);
        assert!(Color::TRANSPARENT.is_transparent());
    }
}
