#![forbid(unsafe_code)]

//! Template compositor for the floating preview window.
//!
//! # Role in cwin
//! The preview window is one rich-text buffer. Its content comes from the
//! theme's ordered [`WindowComponent`] list, and every piece of text the
//! compositor appends is tagged with a [`StyleSpan`]. The host renderer
//! turns spans into native text attributes; [`WindowTouch`] maps taps back
//! to candidates, key commands, caret moves, and drags.
//!
//! # Pass structure
//!
//! Each pass starts from an empty buffer. Components append in order:
//!
//! - **Composition**: `start`, the pre-edit split into before / selection /
//!   after spans, then `end`. The pre-edit's buffer range becomes the
//!   composition hit region.
//! - **Candidates**: `start` before the first emitted candidate, then per
//!   candidate a separator (`sep`, or a line break on a sticky line or when
//!   the line would exceed `max_length`), the optional label, the text, and
//!   the optional comment. `end` follows the last one.
//! - **Button**: suppressed unless its `when` condition holds; otherwise
//!   `start`, the clickable label, `end`.
//! - **Move**: `start`, the drag handle, `end`. The handle's buffer range
//!   becomes the drag hit region.
//!
//! An empty pre-edit yields no window at all.
//!
//! # Example
//!
//! ```
//! use cwin_core::{CompositionState, EngineSnapshot};
//! use cwin_style::{CompositionTemplate, WindowComponent, WindowStyle};
//! use cwin_widgets::Compositor;
//!
//! let style = WindowStyle::default()
//!     .components(vec![WindowComponent::Composition(CompositionTemplate::default())]);
//! let snapshot = EngineSnapshot {
//!     composition: CompositionState::new("ni3hao3", 0, 7),
//!     ..EngineSnapshot::default()
//! };
//! let window = Compositor::new(&style).compose(&snapshot).unwrap();
//! assert_eq!(window.text(), "ni3hao3");
//! assert_eq!(window.spans().len(), 1);
//! ```
//!
//! [`WindowTouch`]: crate::WindowTouch

use std::ops::Range;

use ahash::AHashMap;
use cwin_core::{EngineFlags, EngineSnapshot, Orientation};
use cwin_layout::calc_start_num;
use cwin_style::{
    ButtonTemplate, CandidateTemplate, CompositionTemplate, MoveTemplate, TextAlign,
    WindowComponent, WindowStyle,
};
use cwin_text::apply_template;

use crate::span::{CandidatePart, SpanKind, StyleSpan};

/// Display labels for key commands bound to buttons without an explicit
/// label.
pub trait CommandLabels {
    fn label(&self, command: &str) -> Option<&str>;
}

/// No command labels; buttons without a label show the command name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommandLabels;

impl CommandLabels for NoCommandLabels {
    fn label(&self, _command: &str) -> Option<&str> {
        None
    }
}

impl CommandLabels for AHashMap<String, String> {
    fn label(&self, command: &str) -> Option<&str> {
        self.get(command).map(String::as_str)
    }
}

/// Output of one compositor pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposedWindow {
    text: String,
    char_len: usize,
    spans: Vec<StyleSpan>,
    composition_region: Option<Range<usize>>,
    move_region: Option<Range<usize>>,
    candidate_count: usize,
    start_num: usize,
    raw_input_len: usize,
    single_line: bool,
    toolbar: bool,
}

impl ComposedWindow {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buffer length in `char`s.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    #[inline]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Buffer range of the pre-edit text.
    #[inline]
    pub fn composition_region(&self) -> Option<Range<usize>> {
        self.composition_region.clone()
    }

    /// Buffer range of the drag handle.
    #[inline]
    pub fn move_region(&self) -> Option<Range<usize>> {
        self.move_region.clone()
    }

    /// Candidates emitted into the buffer.
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Engine index at which the candidate bar should resume.
    #[inline]
    pub fn start_num(&self) -> usize {
        self.start_num
    }

    #[inline]
    pub fn raw_input_len(&self) -> usize {
        self.raw_input_len
    }

    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    #[inline]
    pub fn is_toolbar(&self) -> bool {
        self.toolbar
    }

    /// The span covering buffer offset `offset`.
    pub fn span_at(&self, offset: usize) -> Option<&StyleSpan> {
        self.spans.iter().find(|s| s.range.contains(&offset))
    }

    /// Text of a `char` range.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.text
            .chars()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start))
            .collect()
    }

    /// Spans are ordered, non-overlapping, non-empty, and inside the buffer.
    pub fn spans_are_valid(&self) -> bool {
        let mut cursor = 0;
        for span in &self.spans {
            if span.range.start < cursor || span.is_empty() || span.range.end > self.char_len {
                return false;
            }
            cursor = span.range.end;
        }
        true
    }
}

/// Builds [`ComposedWindow`]s from a [`WindowStyle`] and engine snapshots.
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a, L: ?Sized = NoCommandLabels> {
    style: &'a WindowStyle,
    labels: &'a L,
    orientation: Orientation,
}

impl<'a> Compositor<'a> {
    pub fn new(style: &'a WindowStyle) -> Self {
        Self {
            style,
            labels: &NoCommandLabels,
            orientation: Orientation::Portrait,
        }
    }
}

impl<'a, L: CommandLabels + ?Sized> Compositor<'a, L> {
    /// Resolve unlabeled buttons through `labels`.
    #[must_use]
    pub fn with_labels<L2: CommandLabels + ?Sized>(self, labels: &'a L2) -> Compositor<'a, L2> {
        Compositor {
            style: self.style,
            labels,
            orientation: self.orientation,
        }
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Compose the preview window from the first candidate.
    pub fn compose(&self, snapshot: &EngineSnapshot) -> Option<ComposedWindow> {
        self.compose_from(snapshot, 0)
    }

    /// Compose the preview window with candidates starting at `start`.
    ///
    /// Returns `None` when the pre-edit is empty; the window should hide.
    pub fn compose_from(&self, snapshot: &EngineSnapshot, start: usize) -> Option<ComposedWindow> {
        let _span = tracing::debug_span!(
            "compose_window",
            candidates = snapshot.candidates.len(),
            start
        )
        .entered();

        if snapshot.composition.is_empty() {
            tracing::debug!("empty composition, window hidden");
            return None;
        }

        let style = self.style;
        let start = start.min(snapshot.candidates.len());
        let end_num = calc_start_num(
            &snapshot.candidates[start..],
            style.min_length,
            style.min_check,
            style.max_entries,
        );

        let mut pass = Pass::new(self, snapshot, start, end_num);
        for component in &style.components {
            match component {
                WindowComponent::Composition(t) => pass.composition(t),
                WindowComponent::Candidates(t) => pass.candidates(t),
                WindowComponent::Button(t) => pass.button(t),
                WindowComponent::Move(t) => pass.move_handle(t),
            }
        }

        let window = pass.finish(start + end_num, false);
        tracing::debug!(
            chars = window.char_len,
            spans = window.spans.len(),
            candidates = window.candidate_count,
            start_num = window.start_num,
            single_line = window.single_line,
            "window composed"
        );
        debug_assert!(window.spans_are_valid());
        Some(window)
    }

    /// Compose the toolbar variant: button components only.
    ///
    /// Returns `None` when no toolbar components are configured or every
    /// button is suppressed.
    pub fn compose_toolbar(&self, snapshot: &EngineSnapshot) -> Option<ComposedWindow> {
        if self.style.toolbar_components.is_empty() {
            return None;
        }
        let mut pass = Pass::new(self, snapshot, 0, 0);
        for component in &self.style.toolbar_components {
            if let WindowComponent::Button(t) = component {
                pass.button(t);
            }
        }
        let window = pass.finish(0, true);
        if window.text.is_empty() {
            tracing::debug!("toolbar empty, window hidden");
            return None;
        }
        Some(window)
    }
}

/// Append-only buffer with span bookkeeping.
#[derive(Debug, Default)]
struct Buffer {
    text: String,
    len: usize,
    spans: Vec<StyleSpan>,
}

impl Buffer {
    fn push(&mut self, s: &str, align: TextAlign, kind: SpanKind) -> Range<usize> {
        let start = self.len;
        if s.is_empty() {
            return start..start;
        }
        self.text.push_str(s);
        self.len += s.chars().count();
        self.spans.push(StyleSpan {
            range: start..self.len,
            align,
            kind,
        });
        start..self.len
    }

    fn decoration(&mut self, s: &str, align: TextAlign) {
        self.push(s, align, SpanKind::Decoration);
    }
}

struct Pass<'p, L: ?Sized> {
    style: &'p WindowStyle,
    labels: &'p L,
    orientation: Orientation,
    snapshot: &'p EngineSnapshot,
    start: usize,
    end_num: usize,
    buf: Buffer,
    composition_region: Option<Range<usize>>,
    move_region: Option<Range<usize>>,
    candidate_count: usize,
}

impl<'p, L: CommandLabels + ?Sized> Pass<'p, L> {
    fn new(
        compositor: &Compositor<'p, L>,
        snapshot: &'p EngineSnapshot,
        start: usize,
        end_num: usize,
    ) -> Self {
        Self {
            style: compositor.style,
            labels: compositor.labels,
            orientation: compositor.orientation,
            snapshot,
            start,
            end_num,
            buf: Buffer::default(),
            composition_region: None,
            move_region: None,
            candidate_count: 0,
        }
    }

    fn composition(&mut self, t: &CompositionTemplate) {
        let align = t.decoration.align;
        let style = self.style;
        let comp = &self.snapshot.composition;
        let letter_spacing = (t.letter_spacing > 0.0).then_some(t.letter_spacing);

        self.buf.decoration(&t.decoration.start, align);

        let (sel_start, sel_end) = comp.clamped_selection();
        let before: String = comp.preedit.chars().take(sel_start).collect();
        let selected: String = comp
            .preedit
            .chars()
            .skip(sel_start)
            .take(sel_end - sel_start)
            .collect();
        let after: String = comp.preedit.chars().skip(sel_end).collect();

        let region_start = self.buf.len;
        for (text, highlighted) in [(before, false), (selected, true), (after, false)] {
            let kind = SpanKind::Composition {
                style: if highlighted {
                    style.text.with_color(style.hilited_text_color)
                } else {
                    style.text
                },
                back: highlighted.then_some(style.hilited_back_color),
                letter_spacing,
                highlighted,
            };
            self.buf.push(&text, align, kind);
        }
        self.composition_region = Some(region_start..self.buf.len);

        self.buf.decoration(&t.decoration.end, align);
    }

    fn candidates(&mut self, t: &CandidateTemplate) {
        let snap = self.snapshot;
        if snap.candidates.is_empty() {
            return;
        }
        let style = self.style;
        let align = t.decoration.align;
        let sticky = style.sticky_lines_for(self.orientation);
        let use_cursor = snap.flags.contains(EngineFlags::CURSOR_HIGHLIGHT);
        let show_comment = snap.show_comment();
        let label_format = t.label.as_deref().filter(|f| !f.is_empty());
        let comment_format = t.comment.as_deref().filter(|f| !f.is_empty());

        let mut line_len = 0usize;
        let mut emitted = 0usize;
        for (n, entry) in snap.candidates[self.start..].iter().enumerate() {
            if emitted >= style.max_entries {
                break;
            }
            if !style.all_phrases && emitted >= self.end_num {
                break;
            }
            if style.all_phrases && entry.char_len() < style.min_length {
                continue;
            }
            let index = self.start + n;
            let text = apply_template(&t.candidate, &entry.text);
            let text_len = text.chars().count();

            if emitted == 0 {
                self.buf.decoration(&t.decoration.start, align);
            } else if (sticky > 0 && sticky >= n)
                || (style.max_length > 0 && line_len + text_len > style.max_length)
            {
                self.buf.decoration("\n", align);
                line_len = 0;
            } else {
                self.buf.decoration(&t.sep, align);
            }

            let highlighted = use_cursor && snap.highlight_index == Some(index);
            let part = |part, text_style, hilited_color| SpanKind::Candidate {
                index,
                part,
                style: text_style,
                hilited_color,
                hilited_back: style.hilited_candidate_back_color,
                highlighted,
            };

            if let Some(format) = label_format
                && let Some(label) = snap.select_labels.get(index)
            {
                let label = apply_template(format, label);
                let kind = part(CandidatePart::Label, style.label, style.hilited_label_color);
                self.buf.push(&label, align, kind);
            }

            let kind = part(
                CandidatePart::Text,
                style.candidate,
                style.hilited_candidate_color,
            );
            self.buf.push(&text, align, kind);
            line_len += text_len;

            if show_comment
                && let Some(format) = comment_format
                && let Some(comment) = entry.visible_comment()
            {
                let comment = apply_template(format, comment);
                line_len += comment.chars().count();
                let kind = part(
                    CandidatePart::Comment,
                    style.comment,
                    style.hilited_comment_color,
                );
                self.buf.push(&comment, align, kind);
            }

            tracing::trace!(index, line_len, "candidate appended");
            emitted += 1;
        }
        self.candidate_count += emitted;

        self.buf.decoration(&t.decoration.end, align);
    }

    fn button(&mut self, t: &ButtonTemplate) {
        let snap = self.snapshot;
        if let Some(when) = t.when
            && !when.holds(snap.has_prev_page, snap.has_menu())
        {
            tracing::trace!(command = %t.command, ?when, "button suppressed");
            return;
        }
        let label = t
            .label
            .as_deref()
            .or_else(|| self.labels.label(&t.command))
            .unwrap_or(&t.command)
            .to_owned();
        let align = t.decoration.align;

        self.buf.decoration(&t.decoration.start, align);
        let kind = SpanKind::Button {
            command: t.command.clone(),
            style: self.style.key,
            back: self.style.key_back_color,
        };
        self.buf.push(&label, align, kind);
        self.buf.decoration(&t.decoration.end, align);
    }

    fn move_handle(&mut self, t: &MoveTemplate) {
        let align = t.decoration.align;
        self.buf.decoration(&t.decoration.start, align);
        let kind = SpanKind::MoveHandle {
            style: self.style.key,
        };
        self.move_region = Some(self.buf.push(&t.label, align, kind));
        self.buf.decoration(&t.decoration.end, align);
    }

    fn finish(self, start_num: usize, toolbar: bool) -> ComposedWindow {
        let single_line = !self.buf.text.contains('\n') && (toolbar || self.candidate_count == 0);
        ComposedWindow {
            char_len: self.buf.len,
            text: self.buf.text,
            spans: self.buf.spans,
            composition_region: self.composition_region,
            move_region: self.move_region,
            candidate_count: self.candidate_count,
            start_num,
            raw_input_len: self.snapshot.raw_input_len(),
            single_line,
            toolbar,
        }
    }
}
