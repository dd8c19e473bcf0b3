#![forbid(unsafe_code)]

//! Laid-out cells of the candidate bar.

use cwin_core::RectF;

/// What a cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTarget {
    /// Entry `i` of the page (relative to the page start).
    Candidate(usize),
    PageUp,
    PageDown,
}

impl CellTarget {
    #[inline]
    pub const fn is_candidate(self) -> bool {
        matches!(self, Self::Candidate(_))
    }

    /// The arrow glyph drawn for paging cells.
    pub const fn arrow(self) -> Option<&'static str> {
        match self {
            Self::PageUp => Some(PAGE_UP_ARROW),
            Self::PageDown => Some(PAGE_DOWN_ARROW),
            Self::Candidate(_) => None,
        }
    }
}

pub const PAGE_UP_ARROW: &str = "◀";
pub const PAGE_DOWN_ARROW: &str = "▶";

/// One cell's rectangle and target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub rect: RectF,
    pub target: CellTarget,
}

impl CellGeometry {
    #[inline]
    pub const fn new(rect: RectF, target: CellTarget) -> Self {
        Self { rect, target }
    }
}
