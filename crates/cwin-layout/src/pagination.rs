#![forbid(unsafe_code)]

//! How many leading candidates the floating window shows, and where the bar
//! resumes.
//!
//! The floating preview only earns its space when the leading candidates are
//! long enough. [`calc_start_num`] answers two questions with one number:
//! how many candidates the preview includes, and the index at which the
//! candidate bar picks up. Keeping them one computation keeps the bar and the
//! preview from showing overlapping or missing candidates.
//!
//! # Algorithm
//!
//! 1. Scan backward from index `min(min_check, max_entries) - 1` (clamped to
//!    the list) to the first candidate at least `min_length` chars long.
//!    If none qualifies, start at 0.
//! 2. Scan forward from there, at most up to `max_entries`, and stop at the
//!    first candidate shorter than `min_length`.
//!
//! # Example
//!
//! ```
//! use cwin_core::CandidateEntry;
//! use cwin_layout::calc_start_num;
//!
//! let cands: Vec<_> = ["a", "bb", "ccc"].into_iter().map(CandidateEntry::new).collect();
//! assert_eq!(calc_start_num(&cands, 2, 3, 30), 3);
//! assert_eq!(calc_start_num(&cands, 2, 1, 30), 0);
//! ```

use cwin_core::CandidateEntry;

/// Number of leading candidates for the floating window.
///
/// Lengths are counted in `char`s. Returns 0 for an empty list.
pub fn calc_start_num(
    candidates: &[CandidateEntry],
    min_length: usize,
    min_check: usize,
    max_entries: usize,
) -> usize {
    if candidates.is_empty() {
        return 0;
    }
    let long_enough = |i: usize| candidates[i].char_len() >= min_length;

    let first_check = min_check.min(max_entries).min(candidates.len());
    let mut j = (0..first_check).rev().find(|&i| long_enough(i)).unwrap_or(0);

    let limit = max_entries.min(candidates.len());
    while j < limit {
        if !long_enough(j) {
            break;
        }
        j += 1;
    }
    tracing::debug!(
        start_num = j,
        min_length,
        min_check,
        max_entries,
        "calc_start_num"
    );
    j
}

/// Tracks where the candidate bar starts within the engine's list.
///
/// Paging itself belongs to the engine: the bar's arrow cells come back to
/// the host as [`PageUp`]/[`PageDown`] actions, and the page that follows
/// arrives as a fresh snapshot. The pager only carries the resume index
/// across that transition.
///
/// [`PageUp`]: crate::CellTarget::PageUp
/// [`PageDown`]: crate::CellTarget::PageDown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarPager {
    start: usize,
}

impl BarPager {
    pub const fn new() -> Self {
        Self { start: 0 }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Resume at `start`, clamped to `total`.
    pub fn resume_at(&mut self, start: usize, total: usize) {
        self.start = start.min(total);
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(texts: &[&str]) -> Vec<CandidateEntry> {
        texts.iter().map(|t| CandidateEntry::new(*t)).collect()
    }

    #[test]
    fn scenario_from_short_first_candidate() {
        assert_eq!(calc_start_num(&cands(&["a", "bb", "ccc"]), 2, 3, 30), 3);
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(calc_start_num(&[], 2, 3, 30), 0);
    }

    #[test]
    fn all_short_is_zero() {
        let c = cands(&["a", "b", "c"]);
        assert_eq!(calc_start_num(&c, 2, 3, 30), 0);
    }

    #[test]
    fn min_check_beyond_max_entries_all_short() {
        let c = cands(&["a", "b", "c", "d"]);
        assert_eq!(calc_start_num(&c, 2, 10, 2), 0);
    }

    #[test]
    fn all_long_caps_at_max_entries() {
        let c = cands(&["aa", "bb", "cc", "dd"]);
        assert_eq!(calc_start_num(&c, 2, 1, 3), 3);
        assert_eq!(calc_start_num(&c, 2, 1, 30), 4);
    }

    #[test]
    fn forward_scan_stops_at_short() {
        let c = cands(&["你好", "世界", "a", "长句子"]);
        assert_eq!(calc_start_num(&c, 2, 1, 30), 2);
        // The backward scan finds "长句子" first, then the forward scan runs
        // from there.
        assert_eq!(calc_start_num(&c, 2, 4, 30), 4);
    }

    #[test]
    fn zero_min_length_takes_everything_up_to_cap() {
        let c = cands(&["", "a"]);
        assert_eq!(calc_start_num(&c, 0, 0, 30), 2);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let c = cands(&["你", "好"]);
        assert_eq!(calc_start_num(&c, 2, 2, 30), 0);
    }

    #[test]
    fn pager_resume_is_clamped() {
        let mut p = BarPager::new();
        p.resume_at(8, 3);
        assert_eq!(p.start(), 3);
        p.reset();
        assert_eq!(p.start(), 0);
    }
}
