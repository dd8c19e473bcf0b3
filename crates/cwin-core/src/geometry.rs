#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are `f32` pixels with the origin at the top-left corner of
//! whichever space the value lives in (candidate view, popup view, or screen).

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero-sized.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// An axis-aligned rectangle stored as its four edges.
///
/// `left`/`top` are inclusive and `right`/`bottom` exclusive for containment
/// tests. A rectangle with `right <= left` or `bottom <= top` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// A zero-width rectangle, used for caret markers.
    #[inline]
    pub const fn vertical_line(x: f32, top: f32, bottom: f32) -> Self {
        Self::new(x, top, x, bottom)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    /// Check if the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Whether every edge is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Shrink (positive) or grow (negative) the rectangle on each axis.
    #[must_use]
    pub fn inset(&self, dx: f32, dy: f32) -> RectF {
        RectF::new(
            self.left + dx,
            self.top + dy,
            self.right - dx,
            self.bottom - dy,
        )
    }

    /// Translate the rectangle.
    #[must_use]
    pub fn offset(&self, dx: f32, dy: f32) -> RectF {
        RectF::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// The smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &RectF) -> RectF {
        RectF::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

/// A 2D affine transform, row-major:
///
/// ```text
/// | scale_x  skew_x   trans_x |
/// | skew_y   scale_y  trans_y |
/// ```
///
/// Hosts deliver the view-to-screen matrix alongside cursor anchor updates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub scale_x: f32,
    pub skew_x: f32,
    pub trans_x: f32,
    pub skew_y: f32,
    pub scale_y: f32,
    pub trans_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        skew_x: 0.0,
        trans_x: 0.0,
        skew_y: 0.0,
        scale_y: 1.0,
        trans_y: 0.0,
    };

    /// Pure translation.
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self {
            trans_x: dx,
            trans_y: dy,
            ..Self::IDENTITY
        }
    }

    /// Pure scale about the origin.
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub fn map_point(&self, p: PointF) -> PointF {
        PointF::new(
            self.scale_x * p.x + self.skew_x * p.y + self.trans_x,
            self.skew_y * p.x + self.scale_y * p.y + self.trans_y,
        )
    }

    /// Map a rectangle and return the bounding box of its four mapped corners.
    pub fn map_rect(&self, r: &RectF) -> RectF {
        let corners = [
            self.map_point(PointF::new(r.left, r.top)),
            self.map_point(PointF::new(r.right, r.top)),
            self.map_point(PointF::new(r.left, r.bottom)),
            self.map_point(PointF::new(r.right, r.bottom)),
        ];
        let mut out = RectF::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
        for c in &corners[1..] {
            out.left = out.left.min(c.x);
            out.top = out.top.min(c.y);
            out.right = out.right.max(c.x);
            out.bottom = out.bottom.max(c.y);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{PointF, RectF, Transform};

    #[test]
    fn rect_contains_edges() {
        let rect = RectF::new(2.0, 3.0, 6.0, 8.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(5.9, 7.9));
        assert!(!rect.contains(6.0, 3.0));
        assert!(!rect.contains(2.0, 8.0));
    }

    #[test]
    fn rect_inset_vertical_only() {
        let rect = RectF::new(0.0, 0.0, 10.0, 40.0);
        let inner = rect.inset(0.0, 4.0);
        assert_eq!(inner, RectF::new(0.0, 4.0, 10.0, 36.0));
        assert_eq!(inner.width(), rect.width());
    }

    #[test]
    fn zero_width_rect_is_empty_but_finite() {
        let caret = RectF::vertical_line(10.0, 5.0, 25.0);
        assert!(caret.is_empty());
        assert!(caret.is_finite());
        assert_eq!(caret.height(), 20.0);
    }

    #[test]
    fn union_covers_both() {
        let a = RectF::new(0.0, 0.0, 4.0, 4.0);
        let b = RectF::new(2.0, -1.0, 6.0, 3.0);
        assert_eq!(a.union(&b), RectF::new(0.0, -1.0, 6.0, 4.0));
    }

    #[test]
    fn transform_translate_maps_rect() {
        let m = Transform::translate(100.0, 50.0);
        let r = m.map_rect(&RectF::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r, RectF::new(101.0, 52.0, 103.0, 54.0));
    }

    #[test]
    fn transform_negative_scale_normalizes_rect() {
        let m = Transform::scale(-1.0, 2.0);
        let r = m.map_rect(&RectF::new(1.0, 1.0, 3.0, 2.0));
        assert_eq!(r, RectF::new(-3.0, 2.0, -1.0, 4.0));
    }

    #[test]
    fn identity_is_default() {
        let p = PointF::new(7.0, 9.0);
        assert_eq!(Transform::default().map_point(p), p);
    }
}
