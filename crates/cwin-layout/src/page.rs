#![forbid(unsafe_code)]

//! The slice of candidates shown by the bar.

use cwin_core::{CandidateEntry, EngineSnapshot};
use cwin_style::BarStyle;

/// Candidates visible in the bar, starting at `start_index` of the engine's
/// full list.
///
/// Rebuilt from every snapshot; it has no identity across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidatePage {
    pub entries: Vec<CandidateEntry>,
    /// Offset of `entries[0]` in the engine's candidate list.
    pub start_index: usize,
    /// Highlighted entry, relative to `entries`.
    pub highlight_index: Option<usize>,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    /// Engine-side comment switch (`_hide_comment` cleared).
    pub show_comment: bool,
}

impl CandidatePage {
    /// Build the page that starts at `start` of the snapshot's candidates.
    ///
    /// `start` past the end yields an empty page; the highlight is dropped
    /// when it falls before `start` or past the last entry.
    pub fn from_snapshot(snapshot: &EngineSnapshot, start: usize) -> Self {
        let start = start.min(snapshot.candidates.len());
        let entries = snapshot.candidates[start..].to_vec();
        let highlight_index = snapshot
            .highlight_index
            .and_then(|h| h.checked_sub(start))
            .filter(|&h| h < entries.len());
        Self {
            entries,
            start_index: start,
            highlight_index,
            has_prev_page: snapshot.has_prev_page,
            has_next_page: snapshot.has_next_page,
            show_comment: snapshot.show_comment(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute engine index of entry `i`.
    #[inline]
    pub fn absolute_index(&self, i: usize) -> usize {
        self.start_index + i
    }

    /// Whether comments are drawn at all under `style`.
    #[inline]
    pub fn comments_visible(&self, style: &BarStyle) -> bool {
        style.show_comment && self.show_comment
    }

    /// Whether words are pushed down under a comment row: comments on top,
    /// visible, and at least one entry actually carries one.
    pub fn stacks_comments(&self, style: &BarStyle) -> bool {
        self.comments_visible(style)
            && style.comment_on_top
            && self.entries.iter().any(|e| e.visible_comment().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwin_core::EngineFlags;

    fn snapshot(n: usize, highlight: Option<usize>) -> EngineSnapshot {
        EngineSnapshot {
            candidates: (0..n).map(|i| CandidateEntry::new(format!("c{i}"))).collect(),
            highlight_index: highlight,
            has_next_page: true,
            ..EngineSnapshot::default()
        }
    }

    #[test]
    fn highlight_is_relative_to_start() {
        let page = CandidatePage::from_snapshot(&snapshot(5, Some(3)), 2);
        assert_eq!(page.len(), 3);
        assert_eq!(page.highlight_index, Some(1));
        assert_eq!(page.entries[0].text, "c2");
        assert_eq!(page.absolute_index(1), 3);
        assert!(page.has_next_page);
    }

    #[test]
    fn highlight_before_start_is_dropped() {
        let page = CandidatePage::from_snapshot(&snapshot(5, Some(1)), 2);
        assert_eq!(page.highlight_index, None);
    }

    #[test]
    fn start_past_end_is_empty() {
        let page = CandidatePage::from_snapshot(&snapshot(2, Some(1)), 9);
        assert!(page.is_empty());
        assert_eq!(page.start_index, 2);
        assert_eq!(page.highlight_index, None);
    }

    #[test]
    fn hide_comment_flag_carries_over() {
        let mut snap = snapshot(1, None);
        snap.flags |= EngineFlags::HIDE_COMMENT;
        assert!(!CandidatePage::from_snapshot(&snap, 0).show_comment);
    }

    #[test]
    fn stacking_needs_a_visible_comment() {
        let on_top = BarStyle::default().comment_on_top(true);
        let mut snap = snapshot(2, None);
        let page = CandidatePage::from_snapshot(&snap, 0);
        assert!(page.comments_visible(&on_top));
        assert!(!page.stacks_comments(&on_top));

        snap.candidates[1] = CandidateEntry::new("c1").with_comment("ni");
        let page = CandidatePage::from_snapshot(&snap, 0);
        assert!(page.stacks_comments(&on_top));
        assert!(!page.stacks_comments(&BarStyle::default()));
        assert!(!page.stacks_comments(&on_top.clone().show_comment(false)));
    }
}
