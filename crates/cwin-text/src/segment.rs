#![forbid(unsafe_code)]

//! Per-codepoint typeface selection.
//!
//! Candidate text mixes Latin, common CJK, and rare supplementary-plane
//! ideographs (CJK Extension B and beyond). Themes may configure dedicated
//! typefaces for the first and last group; everything else renders with the
//! caller's default typeface.
//!
//! # Classification
//!
//! Evaluated per codepoint, first match wins:
//!
//! | Condition                                     | Typeface        |
//! |-----------------------------------------------|-----------------|
//! | `han_ext` configured and codepoint ≥ U+10000  | `han_ext`       |
//! | `latin` configured and codepoint < U+2E80     | `latin`         |
//! | otherwise                                     | caller default  |
//!
//! Consecutive codepoints resolving to the same typeface merge into one
//! [`GlyphRun`]. With no overrides configured the whole string is a single
//! run; measurement must not depend on where run boundaries would have been.
//!
//! # Example
//!
//! ```
//! use cwin_style::{FontId, FontSet};
//! use cwin_text::segment::segment;
//!
//! let fonts = FontSet::NONE.latin(FontId(1));
//! let text = "ab你好";
//! let runs = segment(text, FontId::DEFAULT, &fonts);
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text(text), "ab");
//! assert_eq!(runs[0].font, FontId(1));
//! assert_eq!(runs[1].font, FontId::DEFAULT);
//! ```

use cwin_style::{FontId, FontSet};
use smallvec::SmallVec;

/// Codepoints below this use the Latin override.
pub const LATIN_BOUNDARY: u32 = 0x2E80;

/// First codepoint outside the Basic Multilingual Plane.
pub const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// A maximal byte range of the source sharing one typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphRun {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    pub font: FontId,
}

impl GlyphRun {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the run's slice from the source string.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Runs for one string. Most candidate strings produce one or two.
pub type GlyphRuns = SmallVec<[GlyphRun; 4]>;

/// Resolve the typeface for one codepoint.
#[inline]
pub fn resolve_font(ch: char, default: FontId, fonts: &FontSet) -> FontId {
    let cp = ch as u32;
    if let Some(han) = fonts.han_ext
        && cp >= SUPPLEMENTARY_START
    {
        return han;
    }
    if let Some(latin) = fonts.latin
        && cp < LATIN_BOUNDARY
    {
        return latin;
    }
    default
}

/// Split `text` into typeface runs.
///
/// Empty input yields no runs.
pub fn segment(text: &str, default: FontId, fonts: &FontSet) -> GlyphRuns {
    let mut runs = GlyphRuns::new();
    if text.is_empty() {
        return runs;
    }
    if fonts.is_empty() {
        runs.push(GlyphRun {
            start: 0,
            end: text.len(),
            font: default,
        });
        return runs;
    }

    let mut current: Option<GlyphRun> = None;
    for (offset, ch) in text.char_indices() {
        let font = resolve_font(ch, default, fonts);
        let end = offset + ch.len_utf8();
        match current.as_mut() {
            Some(run) if run.font == font => run.end = end,
            _ => {
                if let Some(done) = current.take() {
                    runs.push(done);
                }
                current = Some(GlyphRun {
                    start: offset,
                    end,
                    font,
                });
            }
        }
    }
    if let Some(done) = current {
        runs.push(done);
    }
    tracing::trace!(runs = runs.len(), bytes = text.len(), "segmented");
    runs
}
