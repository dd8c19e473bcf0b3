#![forbid(unsafe_code)]

//! Engine state snapshots.
//!
//! The composition engine is an external collaborator. After every state
//! change it publishes an [`EngineSnapshot`]; renderers take it by reference
//! and rebuild their derived state from scratch. Nothing in a snapshot is
//! mutated after construction.

use bitflags::bitflags;

/// One selectable candidate proposed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateEntry {
    pub text: String,
    pub comment: Option<String>,
}

impl CandidateEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Length in Unicode scalar values.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The comment, if present and non-empty.
    #[inline]
    pub fn visible_comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// The not-yet-committed input string with its caret/selection range.
///
/// `sel_start`/`sel_end` are character offsets into `preedit`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionState {
    pub preedit: String,
    pub sel_start: usize,
    pub sel_end: usize,
}

impl CompositionState {
    pub fn new(preedit: impl Into<String>, sel_start: usize, sel_end: usize) -> Self {
        Self {
            preedit: preedit.into(),
            sel_start,
            sel_end,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.preedit.is_empty()
    }

    /// Selection clamped into the pre-edit length and put in order.
    pub fn clamped_selection(&self) -> (usize, usize) {
        let len = self.preedit.chars().count();
        let a = self.sel_start.min(len);
        let b = self.sel_end.min(len);
        (a.min(b), a.max(b))
    }
}

bitflags! {
    /// Boolean option switches reported by the engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EngineFlags: u8 {
        /// `_hide_comment`: never render candidate comments.
        const HIDE_COMMENT = 0b0000_0001;
        /// The engine reports a meaningful highlighted candidate.
        const CURSOR_HIGHLIGHT = 0b0000_0010;
        /// The engine is composing in ASCII mode.
        const ASCII_MODE = 0b0000_0100;
    }
}

/// Device orientation, used to pick between sticky-line thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Everything the engine publishes for one state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    /// Full candidate list for the current menu, in engine order.
    pub candidates: Vec<CandidateEntry>,
    /// Absolute index of the engine's highlighted candidate.
    pub highlight_index: Option<usize>,
    /// Select labels ("1", "2", ...) indexed like `candidates`.
    pub select_labels: Vec<String>,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub composition: CompositionState,
    /// The raw key input, used to translate a tapped pre-edit offset into a
    /// caret position.
    pub raw_input: String,
    pub flags: EngineFlags,
}

impl EngineSnapshot {
    /// Whether the engine currently offers at least one candidate.
    #[inline]
    pub fn has_menu(&self) -> bool {
        !self.candidates.is_empty()
    }

    #[inline]
    pub fn show_comment(&self) -> bool {
        !self.flags.contains(EngineFlags::HIDE_COMMENT)
    }

    /// Raw input length in characters.
    #[inline]
    pub fn raw_input_len(&self) -> usize {
        self.raw_input.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped_and_ordered() {
        let c = CompositionState::new("ni3", 5, 1);
        assert_eq!(c.clamped_selection(), (1, 3));
    }

    #[test]
    fn visible_comment_skips_empty() {
        let e = CandidateEntry::new("你").with_comment("");
        assert_eq!(e.visible_comment(), None);
        let e = CandidateEntry::new("你").with_comment("ni");
        assert_eq!(e.visible_comment(), Some("ni"));
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(CandidateEntry::new("𠀀a").char_len(), 2);
    }

    #[test]
    fn hide_comment_flag() {
        let mut snap = EngineSnapshot::default();
        assert!(snap.show_comment());
        snap.flags |= EngineFlags::HIDE_COMMENT;
        assert!(!snap.show_comment());
        assert!(!snap.has_menu());
    }
}
