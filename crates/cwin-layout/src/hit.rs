#![forbid(unsafe_code)]

//! Pointer hit-testing against a [`CandidateLayout`].
//!
//! Each cell's rectangle is adjusted vertically by `vertical_inset` before
//! the containment test: a positive inset shrinks the touch target, a
//! negative one grows it. Cells are never adjusted horizontally, so
//! neighbouring cells cannot overlap. The first match in visual order wins.
//!
//! Results are only meaningful for the layout they were computed against;
//! [`HitResult::generation`] carries that layout's stamp so a caller can
//! reject a result after the page changed.

use crate::bar::CandidateLayout;
use crate::cell::CellTarget;

/// Default vertical adjustment: grow each cell by 12 px above and below.
pub const DEFAULT_VERTICAL_INSET: f32 = -12.0;

/// A hit and the layout generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    pub target: CellTarget,
    /// Index into the layout's cells.
    pub cell: usize,
    pub generation: u64,
}

/// Hit-testing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    pub vertical_inset: f32,
}

impl Default for HitTester {
    fn default() -> Self {
        Self {
            vertical_inset: DEFAULT_VERTICAL_INSET,
        }
    }
}

impl HitTester {
    #[must_use]
    pub const fn with_vertical_inset(vertical_inset: f32) -> Self {
        Self { vertical_inset }
    }

    /// Find the cell under `(x, y)`.
    pub fn test(&self, layout: &CandidateLayout, x: f32, y: f32) -> Option<HitResult> {
        layout
            .cells()
            .iter()
            .enumerate()
            .find(|(_, cell)| cell.rect.inset(0.0, self.vertical_inset).contains(x, y))
            .map(|(i, cell)| HitResult {
                target: cell.target,
                cell: i,
                generation: layout.generation(),
            })
    }
}

impl CandidateLayout {
    /// Hit-test with the default touch margin.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<CellTarget> {
        HitTester::default().test(self, x, y).map(|hit| hit.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidatePage, layout};
    use cwin_core::CandidateEntry;
    use cwin_style::{BarStyle, FontSet, TextStyle};
    use cwin_text::{CellMeasurer, RunPainter};

    fn sample() -> CandidateLayout {
        let text = TextStyle::default().with_size(20.0);
        let style = BarStyle::default()
            .padding(5.0)
            .spacing(4.0)
            .candidate(text)
            .symbol(text);
        let page = CandidatePage {
            entries: vec![CandidateEntry::new("你"), CandidateEntry::new("好")],
            has_prev_page: true,
            has_next_page: true,
            ..CandidatePage::default()
        };
        let painter = RunPainter::new(CellMeasurer::default(), FontSet::NONE);
        layout(&page, 40.0, &style, &painter).with_generation(7)
    }

    #[test]
    fn maps_points_to_targets() {
        // PageUp 0..20, 你 24..54, 好 58..88, PageDown 92..112
        let l = sample();
        assert_eq!(l.hit_test(1.0, 20.0), Some(CellTarget::PageUp));
        assert_eq!(l.hit_test(30.0, 20.0), Some(CellTarget::Candidate(0)));
        assert_eq!(l.hit_test(60.0, 20.0), Some(CellTarget::Candidate(1)));
        assert_eq!(l.hit_test(100.0, 20.0), Some(CellTarget::PageDown));
    }

    #[test]
    fn gaps_and_outside_miss() {
        let l = sample();
        assert_eq!(l.hit_test(22.0, 20.0), None);
        assert_eq!(l.hit_test(200.0, 20.0), None);
        assert_eq!(l.hit_test(-1.0, 20.0), None);
    }

    #[test]
    fn positive_inset_excludes_margin() {
        let l = sample();
        let tester = HitTester::with_vertical_inset(6.0);
        assert!(tester.test(&l, 30.0, 3.0).is_none());
        assert!(tester.test(&l, 30.0, 37.0).is_none());
        let hit = tester.test(&l, 30.0, 6.0).unwrap();
        assert_eq!(hit.target, CellTarget::Candidate(0));
        assert_eq!(hit.cell, 1);
        assert_eq!(hit.generation, 7);
    }

    #[test]
    fn default_inset_grows_vertically() {
        let l = sample();
        assert_eq!(l.hit_test(30.0, -5.0), Some(CellTarget::Candidate(0)));
        assert_eq!(l.hit_test(30.0, 51.0), Some(CellTarget::Candidate(0)));
        assert_eq!(l.hit_test(30.0, 52.0), None);
    }
}
