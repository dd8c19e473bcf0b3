//! Property-based invariant tests for geometry and snapshots.
//!
//! 1. `union` contains both operands' corners.
//! 2. `map_rect` through a translate is `offset`.
//! 3. `clamped_selection` is ordered and inside the pre-edit.
//! 4. A debouncer only ever honours its newest ticket.

use cwin_core::{CompositionState, Debouncer, RectF, Transform};
use proptest::prelude::*;
use web_time::{Duration, Instant};

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_rect() -> impl Strategy<Value = RectF> {
    (-1.0e4f32..1.0e4, -1.0e4f32..1.0e4, 0.0f32..500.0, 0.0f32..500.0)
        .prop_map(|(x, y, w, h)| RectF::new(x, y, x + w, y + h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Rectangles
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn union_covers_both(a in arb_rect(), b in arb_rect()) {
        let u = a.union(&b);
        for r in [a, b] {
            prop_assert!(u.left <= r.left && u.top <= r.top);
            prop_assert!(u.right >= r.right && u.bottom >= r.bottom);
        }
        prop_assert_eq!(u, b.union(&a));
    }

    #[test]
    fn translate_is_offset(r in arb_rect(), dx in -1.0e3f32..1.0e3, dy in -1.0e3f32..1.0e3) {
        prop_assert_eq!(Transform::translate(dx, dy).map_rect(&r), r.offset(dx, dy));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selection_is_clamped(preedit in "[a-z中 ]{0,12}", a in 0usize..20, b in 0usize..20) {
        let state = CompositionState::new(preedit.clone(), a, b);
        let (start, end) = state.clamped_selection();
        prop_assert!(start <= end);
        prop_assert!(end <= preedit.chars().count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Debounce
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn only_latest_ticket_is_current(requests in 1usize..10, delay_ms in 0u64..50) {
        let mut debouncer = Debouncer::new(Duration::from_millis(delay_ms));
        let now = Instant::now();
        let tickets: Vec<_> = (0..requests).map(|_| debouncer.request(now)).collect();
        let (last, older) = tickets.split_last().unwrap();
        for t in older {
            prop_assert!(!debouncer.is_current(*t));
        }
        prop_assert!(debouncer.is_current(*last));
        let fired = debouncer.poll(now + Duration::from_millis(delay_ms));
        prop_assert_eq!(fired, Some(*last));
        prop_assert!(!debouncer.is_pending());
    }
}
