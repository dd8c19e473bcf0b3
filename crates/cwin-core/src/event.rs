#![forbid(unsafe_code)]

//! Pointer events delivered by the host platform.

/// The kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// Finger or button went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger or button released.
    Up,
    /// The gesture was taken over by the system; nothing should dispatch.
    Cancel,
}

/// A single pointer event.
///
/// `x`/`y` are relative to the view that received the event; `raw_x`/`raw_y`
/// are screen coordinates, needed when dragging a window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    pub raw_x: f32,
    pub raw_y: f32,
}

impl PointerEvent {
    /// Create an event whose view and screen coordinates coincide.
    #[must_use]
    pub const fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            raw_x: x,
            raw_y: y,
        }
    }

    /// Set the screen coordinates.
    #[must_use]
    pub const fn with_raw(mut self, raw_x: f32, raw_y: f32) -> Self {
        self.raw_x = raw_x;
        self.raw_y = raw_y;
        self
    }

    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerKind::Cancel, 0.0, 0.0)
    }
}
