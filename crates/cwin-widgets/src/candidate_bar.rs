#![forbid(unsafe_code)]

//! The horizontal candidate bar: page state, touch dispatch, painting.
//!
//! # Role in cwin
//! [`CandidateBar`] owns the current [`CandidatePage`] and the
//! [`CandidateLayout`] computed for it. Every page or size change rebuilds
//! the layout and bumps its generation, so a press that started on an old
//! page can never dispatch against the new one.
//!
//! # Touch state machine
//!
//! ```text
//!  Down / Move ──▶ pressed = hit(x, y), highlight = pressed cell
//!  Up          ──▶ dispatch pressed (if still current), clear
//!  Cancel      ──▶ clear
//! ```
//!
//! A candidate held for at least the long-press timeout dispatches
//! [`BarAction::LongPress`] instead of [`BarAction::Select`].
//!
//! # Painting
//!
//! [`CandidateBar::paint`] walks the layout in visual order: highlight
//! background, then the word (and comment) or arrow, then a separator
//! before the next cell.

use cwin_core::{EngineSnapshot, PointerEvent, PointerKind, RectF};
use cwin_layout::{CandidateLayout, CandidatePage, CellGeometry, CellTarget, HitResult, HitTester, layout};
use cwin_style::{BarStyle, FontSet};
use cwin_text::{Canvas, RunPainter, TextMeasurer};
use web_time::{Duration, Instant};

/// Hold time after which a candidate press becomes a long press.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(400);

/// What a completed gesture on the bar asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarAction {
    /// Absolute engine candidate index.
    Select(usize),
    LongPress(usize),
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    hit: Option<HitResult>,
    down_at: Instant,
}

/// Candidate bar controller.
#[derive(Debug, Clone)]
pub struct CandidateBar<M> {
    style: BarStyle,
    painter: RunPainter<M>,
    hit_tester: HitTester,
    long_press: Duration,
    view_height: f32,
    page: CandidatePage,
    layout: CandidateLayout,
    generation: u64,
    highlight: Option<usize>,
    press: Option<Press>,
}

impl<M: TextMeasurer> CandidateBar<M> {
    pub fn new(style: BarStyle, painter: RunPainter<M>) -> Self {
        let view_height = style.candidate_view_height;
        Self {
            style,
            painter,
            hit_tester: HitTester::default(),
            long_press: DEFAULT_LONG_PRESS,
            view_height,
            page: CandidatePage::default(),
            layout: CandidateLayout::default(),
            generation: 0,
            highlight: None,
            press: None,
        }
    }

    #[must_use]
    pub fn with_hit_tester(mut self, hit_tester: HitTester) -> Self {
        self.hit_tester = hit_tester;
        self
    }

    #[must_use]
    pub fn with_long_press(mut self, timeout: Duration) -> Self {
        self.long_press = timeout;
        self
    }

    #[inline]
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    #[inline]
    pub fn page(&self) -> &CandidatePage {
        &self.page
    }

    #[inline]
    pub fn layout(&self) -> &CandidateLayout {
        &self.layout
    }

    #[inline]
    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Cell currently drawn highlighted, if any.
    #[inline]
    pub fn highlighted_cell(&self) -> Option<usize> {
        self.highlight
    }

    /// Show the page of `snapshot` that starts at `start`.
    pub fn show(&mut self, snapshot: &EngineSnapshot, start: usize) {
        self.set_page(CandidatePage::from_snapshot(snapshot, start));
    }

    pub fn set_page(&mut self, page: CandidatePage) {
        self.page = page;
        self.relayout();
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
        self.relayout();
    }

    /// Swap override typefaces; widths change, so the layout is rebuilt.
    pub fn set_fonts(&mut self, fonts: FontSet) {
        self.painter.set_fonts(fonts);
        self.relayout();
    }

    pub fn resize(&mut self, view_height: f32) {
        if view_height != self.view_height {
            self.view_height = view_height;
            self.relayout();
        }
    }

    /// Drop everything; the bar shows no cells.
    pub fn clear(&mut self) {
        self.set_page(CandidatePage::default());
        self.press = None;
    }

    fn relayout(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.layout = layout(&self.page, self.view_height, &self.style, &self.painter)
            .with_generation(self.generation);
        self.highlight = if self.style.candidate_use_cursor {
            self.layout.highlight_cell()
        } else {
            None
        };
    }

    /// Handle one pointer event in bar coordinates.
    pub fn on_pointer(&mut self, event: &PointerEvent, now: Instant) -> Option<BarAction> {
        match event.kind {
            PointerKind::Down => {
                let hit = self.hit_tester.test(&self.layout, event.x, event.y);
                self.highlight = hit.map(|h| h.cell);
                self.press = Some(Press { hit, down_at: now });
                None
            }
            PointerKind::Move => {
                let hit = self.hit_tester.test(&self.layout, event.x, event.y);
                self.highlight = hit.map(|h| h.cell);
                let down_at = self.press.map_or(now, |p| p.down_at);
                self.press = Some(Press { hit, down_at });
                None
            }
            PointerKind::Up => {
                self.highlight = None;
                let press = self.press.take()?;
                let hit = press.hit?;
                if hit.generation != self.layout.generation() {
                    tracing::warn!(
                        hit_generation = hit.generation,
                        layout_generation = self.layout.generation(),
                        "stale hit-test result dropped"
                    );
                    return None;
                }
                let held = now.saturating_duration_since(press.down_at);
                let action = match hit.target {
                    CellTarget::Candidate(i) => {
                        let index = self.page.absolute_index(i);
                        if held >= self.long_press {
                            BarAction::LongPress(index)
                        } else {
                            BarAction::Select(index)
                        }
                    }
                    CellTarget::PageUp => BarAction::PageUp,
                    CellTarget::PageDown => BarAction::PageDown,
                };
                tracing::debug!(?action, "bar dispatch");
                Some(action)
            }
            PointerKind::Cancel => {
                self.highlight = None;
                self.press = None;
                None
            }
        }
    }

    /// Paint the bar through `canvas`.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let _span = tracing::debug_span!("paint_bar", cells = self.layout.len()).entered();
        let style = &self.style;
        let cells = self.layout.cells();
        let comments_visible = self.page.comments_visible(style);
        let stack_words = self.page.stacks_comments(style);

        for (i, cell) in cells.iter().enumerate() {
            let lit = style.candidate_use_cursor && self.highlight == Some(i);
            if lit {
                canvas.fill_round_rect(cell.rect, style.round_corner, style.hilited_back_color);
            }
            match cell.target {
                CellTarget::Candidate(e) => {
                    if let Some(entry) = self.page.entries.get(e) {
                        let comment = entry.visible_comment().filter(|_| comments_visible);
                        self.paint_word(canvas, cell, &entry.text, comment, lit, stack_words);
                    }
                }
                target => {
                    if let Some(arrow) = target.arrow() {
                        let color = if lit {
                            style.hilited_comment_color
                        } else {
                            style.comment.color
                        };
                        let symbol = style.symbol.with_color(color);
                        let baseline = self
                            .painter
                            .metrics(&symbol)
                            .centered_baseline(cell.rect.top, cell.rect.height());
                        self.painter
                            .draw(canvas, arrow, cell.rect.center_x(), baseline, &symbol);
                    }
                }
            }
            if i + 1 < cells.len() {
                let h = cell.rect.height();
                let x = cell.rect.right;
                canvas.fill_rect(
                    RectF::new(
                        x - style.spacing,
                        cell.rect.top + h * 0.2,
                        x + style.spacing,
                        cell.rect.top + h * 0.8,
                    ),
                    style.separator_color,
                );
            }
        }
    }

    fn paint_word<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        cell: &CellGeometry,
        word: &str,
        comment: Option<&str>,
        lit: bool,
        stack_words: bool,
    ) {
        let style = &self.style;
        let rect = cell.rect;
        let word_style = if lit {
            style.candidate.with_color(style.hilited_candidate_color)
        } else {
            style.candidate
        };
        let metrics = self.painter.metrics(&word_style);
        let mut word_x = rect.center_x();
        let mut word_y = if stack_words {
            metrics.centered_baseline(
                rect.top + style.comment_height,
                rect.height() - style.comment_height,
            )
        } else {
            metrics.centered_baseline(rect.top, rect.height())
        };

        if let Some(comment) = comment {
            let comment_style = if lit {
                style.comment.with_color(style.hilited_comment_color)
            } else {
                style.comment
            };
            let cm = self.painter.metrics(&comment_style);
            if style.comment_on_top {
                let y = cm.centered_baseline(rect.top, style.comment_height);
                self.painter
                    .draw(canvas, comment, rect.center_x(), y, &comment_style);
            } else {
                let width = self.painter.measure(comment, &comment_style);
                word_x -= width * 0.5;
                let y = cm.centered_baseline(rect.bottom - style.comment_height, style.comment_height);
                self.painter
                    .draw(canvas, comment, rect.right - width * 0.5, y, &comment_style);
                word_y = metrics.centered_baseline(rect.top, rect.height());
            }
        }

        self.painter.draw(canvas, word, word_x, word_y, &word_style);
    }
}
