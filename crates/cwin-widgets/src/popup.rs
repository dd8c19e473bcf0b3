#![forbid(unsafe_code)]

//! Popup placement for the floating preview window.
//!
//! # Role in cwin
//! [`PopupPositioner`] turns the configured [`PopupPosition`], the latest
//! cursor anchor, and the popup's measured size into screen coordinates.
//! [`PopupController`] wraps it with visibility state and a [`Debouncer`],
//! and emits [`PopupCommand`]s for the host window manager.
//!
//! # Placement rules
//!
//! ```text
//!  min_x = horizontal_margin          max_x = area.width  - popup.width  - min_x
//!  min_y = vertical_margin            max_y = area.bottom - popup.height - min_y
//! ```
//!
//! - **Fixed** (no live cursor bounds, a non-follow position, or no anchor
//!   reported yet): `TopLeft` → `(min_x, min_y)`, `TopRight` →
//!   `(max_x, min_y)`, `BottomRight` → `(max_x, max_y)`, everything else →
//!   `(min_x, max_y)`.
//! - **Follow cursor**: `x` is the anchor's left edge (`Left`, `LeftUp`) or
//!   right edge (`Right`, `RightUp`); `y` is `anchor.bottom + vertical_margin`,
//!   or `anchor.top - popup.height - vertical_margin` for the `Up` variants.
//! - **Drag**: the last dragged `(x, y)`, unclamped.
//!
//! All non-drag coordinates are clamped into `[min, max]`. When the popup
//! does not fit (`max < min`) the coordinate takes `min`.
//!
//! # Example
//!
//! ```
//! use cwin_core::{RectF, SizeF};
//! use cwin_style::{Movable, PopupPosition};
//! use cwin_widgets::{PopupArea, PopupPositioner};
//!
//! let mut positioner = PopupPositioner::new(PopupPosition::Right, Movable::Never, 10.0, 0.0);
//! positioner.set_anchor_rect(RectF::new(100.0, 100.0, 120.0, 130.0));
//! let placement = positioner.place(PopupArea::new(1080.0, 1920.0), SizeF::new(200.0, 80.0));
//! assert_eq!((placement.x, placement.y), (120.0, 130.0));
//! ```

use cwin_core::{Debouncer, PointF, RectF, SizeF};
use cwin_style::{Movable, PopupPosition, WindowStyle};
use web_time::{Duration, Instant};

use crate::anchor::CursorAnchorInfo;
use crate::error::AnchorError;

/// The region the popup must stay inside: `[0, width] × [0, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupArea {
    pub width: f32,
    pub bottom: f32,
}

impl PopupArea {
    pub const fn new(width: f32, bottom: f32) -> Self {
        Self { width, bottom }
    }
}

/// Which rule produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementMode {
    Fixed,
    FollowCursor,
    Drag,
}

/// Computed popup origin plus the size it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPlacement {
    pub x: f32,
    pub y: f32,
    pub size: SizeF,
    pub mode: PlacementMode,
}

/// Clamp `v` into `[min, max]`; `min` wins when the range is empty.
fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    if max < min { min } else { v.clamp(min, max) }
}

/// Placement state for one input session.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupPositioner {
    configured: PopupPosition,
    position: PopupPosition,
    movable: Movable,
    horizontal_margin: f32,
    vertical_margin: f32,
    follow_supported: bool,
    anchor: Option<RectF>,
    drag: PointF,
}

impl PopupPositioner {
    pub fn new(
        position: PopupPosition,
        movable: Movable,
        horizontal_margin: f32,
        vertical_margin: f32,
    ) -> Self {
        Self {
            configured: position,
            position,
            movable,
            horizontal_margin,
            vertical_margin,
            follow_supported: true,
            anchor: None,
            drag: PointF::default(),
        }
    }

    pub fn from_style(style: &WindowStyle) -> Self {
        Self::new(
            style.position,
            style.movable,
            style.horizontal_margin,
            style.vertical_margin,
        )
    }

    /// Whether the host can report live cursor bounds at all.
    #[must_use]
    pub fn follow_supported(mut self, supported: bool) -> Self {
        self.follow_supported = supported;
        self
    }

    #[inline]
    pub fn position(&self) -> PopupPosition {
        self.position
    }

    #[inline]
    pub fn anchor(&self) -> Option<RectF> {
        self.anchor
    }

    /// Whether anchor updates are ignored.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        !self.follow_supported || !self.position.follows_cursor()
    }

    /// Apply a host anchor update.
    ///
    /// Ignored in fixed mode. On error the previous anchor is kept.
    pub fn update_anchor(&mut self, info: &CursorAnchorInfo) -> Result<(), AnchorError> {
        if self.is_fixed() {
            return Ok(());
        }
        let rect = info.screen_rect()?;
        self.set_anchor_rect(rect);
        Ok(())
    }

    /// Set the screen-space anchor directly.
    pub fn set_anchor_rect(&mut self, rect: RectF) {
        tracing::trace!(?rect, "anchor updated");
        self.anchor = Some(rect);
    }

    /// Switch to drag mode at `(x, y)`.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.position = PopupPosition::Drag;
        self.drag = PointF::new(x, y);
    }

    /// Called on every content update. `Movable::Once` drops the dragged
    /// position in favor of the configured one.
    pub fn on_content_update(&mut self) {
        if self.movable == Movable::Once {
            self.position = self.configured;
        }
    }

    /// Forget the anchor and any drag; used when the input session ends.
    pub fn reset(&mut self) {
        self.position = self.configured;
        self.anchor = None;
        self.drag = PointF::default();
    }

    /// Compute where a popup of `size` goes inside `area`.
    pub fn place(&self, area: PopupArea, size: SizeF) -> PopupPlacement {
        let min_x = self.horizontal_margin;
        let min_y = self.vertical_margin;
        let max_x = area.width - size.width - min_x;
        let max_y = area.bottom - size.height - min_y;

        let follow = match self.anchor {
            Some(anchor) if !self.is_fixed() => Some(anchor),
            _ => None,
        };

        let (x, y, mode) = match (self.position, follow) {
            (PopupPosition::Drag, _) => {
                return PopupPlacement {
                    x: self.drag.x,
                    y: self.drag.y,
                    size,
                    mode: PlacementMode::Drag,
                };
            }
            (position, Some(anchor)) => {
                let x = if position.anchors_right() {
                    anchor.right
                } else {
                    anchor.left
                };
                let y = if position.opens_upward() {
                    anchor.top - size.height - self.vertical_margin
                } else {
                    anchor.bottom + self.vertical_margin
                };
                (x, y, PlacementMode::FollowCursor)
            }
            (PopupPosition::TopRight, None) => (max_x, min_y, PlacementMode::Fixed),
            (PopupPosition::TopLeft, None) => (min_x, min_y, PlacementMode::Fixed),
            (PopupPosition::BottomRight, None) => (max_x, max_y, PlacementMode::Fixed),
            (_, None) => (min_x, max_y, PlacementMode::Fixed),
        };

        let placement = PopupPlacement {
            x: clamp_axis(x, min_x, max_x),
            y: clamp_axis(y, min_y, max_y),
            size,
            mode,
        };
        tracing::debug!(
            position = ?self.position,
            ?mode,
            x = placement.x,
            y = placement.y,
            "popup placed"
        );
        placement
    }
}

/// What the host should do with the popup window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopupCommand {
    Show { x: f32, y: f32 },
    Update { x: f32, y: f32 },
    Dismiss,
}

/// Visibility and debounced repositioning for the preview window.
///
/// Every trigger (content change, anchor update) re-arms one debounced
/// reposition; only the latest survives. Hiding cancels it, and the next
/// content change arms a fresh `Show`.
#[derive(Debug, Clone)]
pub struct PopupController {
    positioner: PopupPositioner,
    debouncer: Debouncer,
    showing: bool,
    has_content: bool,
}

impl PopupController {
    pub fn new(positioner: PopupPositioner) -> Self {
        Self {
            positioner,
            debouncer: Debouncer::immediate(),
            showing: false,
            has_content: false,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    #[inline]
    pub fn positioner(&self) -> &PopupPositioner {
        &self.positioner
    }

    #[inline]
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// When the host should call [`poll`](Self::poll) next.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// New window content. `visible == false` (empty composition) hides.
    pub fn on_content(&mut self, visible: bool, now: Instant) -> Option<PopupCommand> {
        if !visible {
            return self.hide();
        }
        self.has_content = true;
        self.positioner.on_content_update();
        self.debouncer.request(now);
        None
    }

    /// Host anchor update. Schedules a reposition while content is present.
    pub fn on_anchor(
        &mut self,
        info: &CursorAnchorInfo,
        now: Instant,
    ) -> Result<(), AnchorError> {
        if let Err(err) = self.positioner.update_anchor(info) {
            tracing::warn!(%err, "anchor update skipped");
            return Err(err);
        }
        if self.has_content && !self.positioner.is_fixed() {
            self.debouncer.request(now);
        }
        Ok(())
    }

    /// Drag gesture from the move handle. Applies immediately.
    pub fn on_drag(&mut self, x: f32, y: f32) -> Option<PopupCommand> {
        self.positioner.drag_to(x, y);
        self.showing.then_some(PopupCommand::Update { x, y })
    }

    /// Fire the pending reposition if due.
    pub fn poll(&mut self, now: Instant, area: PopupArea, size: SizeF) -> Option<PopupCommand> {
        let ticket = self.debouncer.poll(now)?;
        if !self.debouncer.is_current(ticket) || !self.has_content {
            return None;
        }
        let p = self.positioner.place(area, size);
        if self.showing {
            Some(PopupCommand::Update { x: p.x, y: p.y })
        } else {
            self.showing = true;
            Some(PopupCommand::Show { x: p.x, y: p.y })
        }
    }

    /// Hide the popup and drop any pending reposition.
    pub fn hide(&mut self) -> Option<PopupCommand> {
        self.debouncer.cancel();
        self.has_content = false;
        if self.showing {
            self.showing = false;
            tracing::debug!("popup dismissed");
            Some(PopupCommand::Dismiss)
        } else {
            None
        }
    }

    /// End of session: hide and forget anchor and drag state.
    pub fn teardown(&mut self) -> Option<PopupCommand> {
        let cmd = self.hide();
        self.positioner.reset();
        cmd
    }
}
