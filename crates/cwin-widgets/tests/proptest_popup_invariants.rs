//! Property-based invariant tests for popup placement.
//!
//! 1. Non-drag placements stay inside `[min, max]` on both axes whenever
//!    the popup fits.
//! 2. With zero margins that is `0 ≤ x ≤ width - popup.width` and
//!    `0 ≤ y ≤ bottom - popup.height`.
//! 3. Drag placements return the dragged point untouched.
//! 4. Placement is deterministic.

use cwin_core::{RectF, SizeF};
use cwin_style::{Movable, PopupPosition};
use cwin_widgets::{PlacementMode, PopupArea, PopupPositioner};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_position() -> impl Strategy<Value = PopupPosition> {
    prop_oneof![
        Just(PopupPosition::Left),
        Just(PopupPosition::LeftUp),
        Just(PopupPosition::Right),
        Just(PopupPosition::RightUp),
        Just(PopupPosition::Fixed),
        Just(PopupPosition::BottomLeft),
        Just(PopupPosition::BottomRight),
        Just(PopupPosition::TopLeft),
        Just(PopupPosition::TopRight),
        Just(PopupPosition::Center),
    ]
}

fn arb_anchor() -> impl Strategy<Value = RectF> {
    (-500.0f32..3000.0, -500.0f32..3000.0, 0.0f32..200.0, 0.0f32..100.0)
        .prop_map(|(x, y, w, h)| RectF::new(x, y, x + w, y + h))
}

fn arb_area() -> impl Strategy<Value = PopupArea> {
    (100.0f32..3000.0, 100.0f32..3000.0).prop_map(|(w, h)| PopupArea::new(w, h))
}

fn arb_size() -> impl Strategy<Value = SizeF> {
    (0.0f32..400.0, 0.0f32..200.0).prop_map(|(w, h)| SizeF::new(w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2, 4. Clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placement_stays_in_bounds(
        position in arb_position(),
        anchor in prop::option::of(arb_anchor()),
        area in arb_area(),
        size in arb_size(),
        h_margin in 0.0f32..40.0,
        v_margin in 0.0f32..40.0,
    ) {
        let mut p = PopupPositioner::new(position, Movable::Never, h_margin, v_margin);
        if let Some(anchor) = anchor {
            p.set_anchor_rect(anchor);
        }
        let placed = p.place(area, size);
        let max_x = area.width - size.width - h_margin;
        let max_y = area.bottom - size.height - v_margin;

        prop_assert!(placed.x >= h_margin);
        prop_assert!(placed.y >= v_margin);
        if max_x >= h_margin {
            prop_assert!(placed.x <= max_x);
        } else {
            prop_assert_eq!(placed.x, h_margin);
        }
        if max_y >= v_margin {
            prop_assert!(placed.y <= max_y);
        } else {
            prop_assert_eq!(placed.y, v_margin);
        }
        prop_assert_eq!(placed, p.place(area, size));
    }

    #[test]
    fn zero_margin_fits_screen(
        position in arb_position(),
        anchor in arb_anchor(),
        area in arb_area(),
        size in arb_size(),
    ) {
        prop_assume!(size.width <= area.width && size.height <= area.bottom);
        let mut p = PopupPositioner::new(position, Movable::Never, 0.0, 0.0);
        p.set_anchor_rect(anchor);
        let placed = p.place(area, size);
        prop_assert!(0.0 <= placed.x && placed.x <= area.width - size.width);
        prop_assert!(0.0 <= placed.y && placed.y <= area.bottom - size.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Drag
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_is_unclamped(
        position in arb_position(),
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        area in arb_area(),
        size in arb_size(),
    ) {
        let mut p = PopupPositioner::new(position, Movable::Always, 10.0, 10.0);
        p.drag_to(x, y);
        let placed = p.place(area, size);
        prop_assert_eq!(placed.mode, PlacementMode::Drag);
        prop_assert_eq!((placed.x, placed.y), (x, y));
    }
}
