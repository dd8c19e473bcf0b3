#![forbid(unsafe_code)]

//! Touch handling for the floating preview window.
//!
//! The host resolves a pointer position to a buffer offset (its text layout
//! knows where glyphs are) and passes both here together with the event.
//!
//! - **Up** inside the composition region requests a caret move. The caret
//!   position is counted from the right end of the raw input: the number of
//!   pre-edit chars after the tap, ignoring spaces and the `‸` caret marker,
//!   is subtracted from the raw input length.
//! - **Up** on a candidate or button span selects it.
//! - **Down / Move** on the drag handle moves the window, when the theme
//!   allows it. `Movable::Once` re-reads the window origin on every drag
//!   start; `Movable::Always` only on the first one and then tracks the
//!   position itself.
//!
//! Toolbar windows only handle button taps.

use cwin_core::{PointF, PointerEvent, PointerKind};
use cwin_style::Movable;

use crate::compositor::ComposedWindow;
use crate::span::ClickTarget;

/// Caret marker the engine embeds in the pre-edit.
pub const CARET_MARKER: char = '‸';

/// What a touch on the preview window asks for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowAction {
    /// Absolute engine candidate index.
    SelectCandidate(usize),
    KeyCommand(String),
    /// Caret position in raw input `char`s.
    SetCaret(usize),
    MoveWindow { x: f32, y: f32 },
}

/// Drag state for one preview window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTouch {
    movable: Movable,
    first_move: bool,
    current: PointF,
    delta: PointF,
}

impl WindowTouch {
    pub fn new(movable: Movable) -> Self {
        Self {
            movable,
            first_move: true,
            current: PointF::default(),
            delta: PointF::default(),
        }
    }

    #[inline]
    pub fn movable(&self) -> Movable {
        self.movable
    }

    pub fn set_movable(&mut self, movable: Movable) {
        self.movable = movable;
        self.first_move = true;
    }

    /// Handle one pointer event.
    ///
    /// `offset` is the buffer offset under the pointer, if any; `origin` is
    /// the window's current screen position.
    pub fn on_pointer(
        &mut self,
        window: &ComposedWindow,
        offset: Option<usize>,
        event: &PointerEvent,
        origin: PointF,
    ) -> Option<WindowAction> {
        let offset = offset?;
        if window.is_toolbar() {
            return match event.kind {
                PointerKind::Up => click(window, offset),
                _ => None,
            };
        }

        match event.kind {
            PointerKind::Up => {
                if let Some(region) = window.composition_region()
                    && (region.start..=region.end).contains(&offset)
                {
                    let caret = caret_for_offset(window, offset, region.end);
                    tracing::debug!(offset, caret, "caret reposition");
                    return Some(WindowAction::SetCaret(caret));
                }
                click(window, offset)
            }
            PointerKind::Down | PointerKind::Move if self.movable.allows_drag() => {
                let region = window.move_region()?;
                if !(region.start..=region.end).contains(&offset) {
                    return None;
                }
                self.drag(event, origin)
            }
            _ => None,
        }
    }

    fn drag(&mut self, event: &PointerEvent, origin: PointF) -> Option<WindowAction> {
        match event.kind {
            PointerKind::Down => {
                if self.first_move || self.movable == Movable::Once {
                    self.first_move = false;
                    self.current = origin;
                }
                self.delta = PointF::new(self.current.x - event.raw_x, self.current.y - event.raw_y);
                None
            }
            PointerKind::Move => {
                self.current = PointF::new(event.raw_x + self.delta.x, event.raw_y + self.delta.y);
                Some(WindowAction::MoveWindow {
                    x: self.current.x,
                    y: self.current.y,
                })
            }
            _ => None,
        }
    }
}

fn click(window: &ComposedWindow, offset: usize) -> Option<WindowAction> {
    match window.span_at(offset)?.click_target()? {
        ClickTarget::Candidate(index) => Some(WindowAction::SelectCandidate(index)),
        ClickTarget::Command(command) => Some(WindowAction::KeyCommand(command.to_owned())),
    }
}

fn caret_for_offset(window: &ComposedWindow, offset: usize, region_end: usize) -> usize {
    let tail = window
        .slice(offset..region_end)
        .chars()
        .filter(|&c| c != ' ' && c != CARET_MARKER)
        .count();
    window.raw_input_len().saturating_sub(tail)
}
