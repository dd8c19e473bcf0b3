#![forbid(unsafe_code)]

//! Candidate bar layout.
//!
//! [`layout`] turns a [`CandidatePage`] into one rectangle per visible cell.
//! It is pure: the same page, view height, style, and measurer always give
//! the same cells. Drawing and hit-testing both read the resulting
//! [`CandidateLayout`], so it must be rebuilt whenever the page or the view
//! size changes.
//!
//! # Algorithm
//!
//! ```text
//!  x=0                                                      content_width
//!  │◀ cell│sp│ word₀ [comment₀] │sp│ word₁ │sp│ … │sp│▶ cell│
//!  ╰pad◀pad╯   ╰pad word pad╯+comment
//! ```
//!
//! - Paging cells are `2 × padding + width(arrow)` wide.
//! - A word cell is `2 × padding + width(text)`; a visible comment either
//!   adds its width (comment to the right) or widens the cell to
//!   `max(word, comment)` (comment on top).
//! - Every cell is followed by a `spacing` gap; the content width stops at
//!   the right edge of the last cell.
//! - Cells span the full view height.

use cwin_core::RectF;
use cwin_style::BarStyle;
use cwin_text::{RunPainter, TextMeasurer};

use crate::cell::{CellGeometry, CellTarget, PAGE_DOWN_ARROW, PAGE_UP_ARROW};
use crate::page::CandidatePage;

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateLayout {
    cells: Vec<CellGeometry>,
    content_width: f32,
    content_height: f32,
    highlight_cell: Option<usize>,
    generation: u64,
}

impl CandidateLayout {
    /// Cells in visual order: page-up, entries, page-down.
    #[inline]
    pub fn cells(&self) -> &[CellGeometry] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[inline]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Stamp identifying the page this geometry was computed for.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Index into [`cells`](Self::cells) of the engine-highlighted entry.
    #[inline]
    pub fn highlight_cell(&self) -> Option<usize> {
        self.highlight_cell
    }

    /// Cell index holding page entry `entry`.
    pub fn cell_index_of(&self, entry: usize) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.target == CellTarget::Candidate(entry))
    }

    /// Left edge of the highlighted cell, or 0 when nothing is highlighted.
    pub fn highlight_left(&self) -> f32 {
        self.highlighted().map_or(0.0, |c| c.rect.left)
    }

    /// Right edge of the highlighted cell, or 0 when nothing is highlighted.
    pub fn highlight_right(&self) -> f32 {
        self.highlighted().map_or(0.0, |c| c.rect.right)
    }

    fn highlighted(&self) -> Option<&CellGeometry> {
        self.highlight_cell.and_then(|i| self.cells.get(i))
    }
}

/// Lay out `page` in a bar `view_height` pixels tall.
pub fn layout<M: TextMeasurer>(
    page: &CandidatePage,
    view_height: f32,
    style: &BarStyle,
    painter: &RunPainter<M>,
) -> CandidateLayout {
    let _span = tracing::debug_span!("candidate_layout", entries = page.len()).entered();

    let comments_visible = page.comments_visible(style);
    let padding2 = 2.0 * style.padding;
    let mut cells = Vec::with_capacity(page.len() + 2);
    let mut x = 0.0_f32;

    let push = |cells: &mut Vec<CellGeometry>, x: &mut f32, width: f32, target| {
        cells.push(CellGeometry::new(
            RectF::new(*x, 0.0, *x + width, view_height),
            target,
        ));
        *x += width + style.spacing;
    };

    if page.has_prev_page {
        let width = padding2 + painter.measure(PAGE_UP_ARROW, &style.symbol);
        push(&mut cells, &mut x, width, CellTarget::PageUp);
    }

    for (i, entry) in page.entries.iter().enumerate() {
        let mut width = padding2 + painter.measure(&entry.text, &style.candidate);
        if comments_visible && let Some(comment) = entry.visible_comment() {
            let comment_width = painter.measure(comment, &style.comment);
            width = if style.comment_on_top {
                width.max(comment_width)
            } else {
                width + comment_width
            };
        }
        tracing::trace!(index = i, width, "candidate cell");
        push(&mut cells, &mut x, width, CellTarget::Candidate(i));
    }

    if page.has_next_page {
        let width = padding2 + painter.measure(PAGE_DOWN_ARROW, &style.symbol);
        push(&mut cells, &mut x, width, CellTarget::PageDown);
    }

    let content_width = cells.last().map_or(0.0, |c| c.rect.right);
    let content_height = if cells.is_empty() {
        0.0
    } else {
        style.content_height(page.stacks_comments(style))
    };

    let highlight_cell = match page.highlight_index {
        Some(h) if h < page.len() => cells
            .iter()
            .position(|c| c.target == CellTarget::Candidate(h)),
        Some(h) => {
            tracing::warn!(highlight = h, entries = page.len(), "highlight index out of range");
            None
        }
        None => None,
    };

    tracing::debug!(
        cells = cells.len(),
        content_width,
        content_height,
        "candidate layout"
    );

    CandidateLayout {
        cells,
        content_width,
        content_height,
        highlight_cell,
        generation: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwin_core::CandidateEntry;
    use cwin_style::{FontSet, TextStyle};
    use cwin_text::CellMeasurer;
    use tracing_test::traced_test;

    fn painter() -> RunPainter<CellMeasurer> {
        RunPainter::new(CellMeasurer::default(), FontSet::NONE)
    }

    /// 10 px per narrow column, 20 px per CJK char.
    fn style() -> BarStyle {
        let text = TextStyle::default().with_size(20.0);
        BarStyle::default()
            .padding(5.0)
            .spacing(2.0)
            .candidate(text)
            .comment(text)
            .symbol(text)
            .candidate_view_height(40.0)
            .comment_height(10.0)
    }

    fn page(words: &[(&str, Option<&str>)]) -> CandidatePage {
        CandidatePage {
            entries: words
                .iter()
                .map(|(w, c)| {
                    let e = CandidateEntry::new(*w);
                    match c {
                        Some(c) => e.with_comment(*c),
                        None => e,
                    }
                })
                .collect(),
            show_comment: true,
            ..CandidatePage::default()
        }
    }

    #[test]
    fn empty_page_is_empty_layout() {
        let l = layout(&CandidatePage::default(), 40.0, &style(), &painter());
        assert!(l.is_empty());
        assert_eq!(l.content_width(), 0.0);
        assert_eq!(l.content_height(), 0.0);
        assert_eq!(l.highlight_left(), 0.0);
    }

    #[test]
    fn arrows_only_page_keeps_row_height() {
        let p = CandidatePage {
            has_prev_page: true,
            ..CandidatePage::default()
        };
        let l = layout(&p, 40.0, &style().comment_on_top(true), &painter());
        assert_eq!(l.len(), 1);
        assert_eq!(l.content_height(), 40.0);
    }

    #[test]
    fn cells_advance_by_width_plus_spacing() {
        let l = layout(&page(&[("你", None), ("ab", None)]), 40.0, &style(), &painter());
        let rects: Vec<_> = l.cells().iter().map(|c| (c.rect.left, c.rect.right)).collect();
        assert_eq!(rects, vec![(0.0, 30.0), (32.0, 62.0)]);
        assert_eq!(l.content_width(), 62.0);
        assert_eq!(l.cells()[0].rect.bottom, 40.0);
    }

    #[test]
    fn paging_cells_bracket_entries() {
        let mut p = page(&[("a", None)]);
        p.has_prev_page = true;
        p.has_next_page = true;
        let l = layout(&p, 40.0, &style(), &painter());
        let targets: Vec<_> = l.cells().iter().map(|c| c.target).collect();
        assert_eq!(
            targets,
            vec![CellTarget::PageUp, CellTarget::Candidate(0), CellTarget::PageDown]
        );
        // Arrows are one column wide under the cell measurer.
        assert_eq!(l.cells()[0].rect.right, 20.0);
        assert_eq!(l.cells()[1].rect.left, 22.0);
        assert_eq!(l.cells()[2].rect.left, 22.0 + 20.0 + 2.0);
        assert_eq!(l.content_width(), 64.0);
    }

    #[test]
    fn comment_to_the_right_adds_width() {
        let l = layout(&page(&[("你", Some("ni"))]), 40.0, &style(), &painter());
        assert_eq!(l.cells()[0].rect.width(), 50.0);
        assert_eq!(l.content_height(), 40.0);
    }

    #[test]
    fn comment_on_top_takes_max() {
        let s = style().comment_on_top(true);
        let l = layout(&page(&[("你", Some("nihao"))]), 40.0, &s, &painter());
        assert_eq!(l.cells()[0].rect.width(), 50.0);
        let l = layout(&page(&[("你好呀", Some("n"))]), 40.0, &s, &painter());
        assert_eq!(l.cells()[0].rect.width(), 70.0);
        assert_eq!(l.content_height(), 50.0);
    }

    #[test]
    fn comment_row_needs_a_comment() {
        let s = style().comment_on_top(true);
        let l = layout(&page(&[("你", None), ("好", Some(""))]), 40.0, &s, &painter());
        assert_eq!(l.content_height(), 40.0);
        let l = layout(&page(&[("你", None), ("好", Some("hao"))]), 40.0, &s, &painter());
        assert_eq!(l.content_height(), 50.0);
    }

    #[test]
    fn hidden_comments_do_not_count() {
        let mut p = page(&[("你", Some("ni"))]);
        p.show_comment = false;
        let l = layout(&p, 40.0, &style().comment_on_top(true), &painter());
        assert_eq!(l.cells()[0].rect.width(), 30.0);
        assert_eq!(l.content_height(), 40.0);
    }

    #[test]
    fn highlight_maps_to_cell() {
        let mut p = page(&[("a", None), ("b", None)]);
        p.has_prev_page = true;
        p.highlight_index = Some(1);
        let l = layout(&p, 40.0, &style(), &painter());
        assert_eq!(l.highlight_cell(), Some(2));
        assert_eq!(l.highlight_left(), l.cells()[2].rect.left);
        assert_eq!(l.highlight_right(), l.cells()[2].rect.right);
        assert_eq!(l.cell_index_of(0), Some(1));
    }

    #[test]
    #[traced_test]
    fn out_of_range_highlight_warns() {
        let mut p = page(&[("a", None)]);
        p.highlight_index = Some(4);
        let l = layout(&p, 40.0, &style(), &painter());
        assert_eq!(l.highlight_cell(), None);
        assert!(logs_contain("highlight index out of range"));
    }
}
