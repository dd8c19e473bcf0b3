#![forbid(unsafe_code)]

//! One input session's candidate UI: bar, preview window, and popup.
//!
//! [`CandidateSurface`] wires the pieces together for the common case. Each
//! engine snapshot is composed into the preview window first; the number of
//! candidates the preview takes decides where the bar resumes, so the two
//! never show the same candidate twice.
//!
//! ```text
//!  snapshot ──▶ Compositor ──▶ start_num ──▶ CandidateBar::show(start_num)
//!                   │
//!                   └──▶ PopupController::on_content ──▶ poll ──▶ Show / Update
//! ```
//!
//! Hosts that need a different split can drive the components directly.

use cwin_core::{EngineSnapshot, Orientation, PointF, PointerEvent, SizeF};
use cwin_layout::BarPager;
use cwin_style::{BarStyle, WindowStyle};
use cwin_text::{Canvas, RunPainter, TextMeasurer};
use cwin_widgets::{
    BarAction, CandidateBar, ComposedWindow, Compositor, CursorAnchorInfo, PopupArea,
    PopupCommand, PopupController, PopupPositioner, WindowAction, WindowTouch,
};
use web_time::Instant;

use crate::error::{DegradationAction, Error, Result};

/// Candidate bar plus floating preview for one input session.
#[derive(Debug)]
pub struct CandidateSurface<M> {
    window_style: WindowStyle,
    orientation: Orientation,
    preview: bool,
    bar: CandidateBar<M>,
    pager: BarPager,
    popup: PopupController,
    touch: WindowTouch,
    window: Option<ComposedWindow>,
}

impl<M: TextMeasurer> CandidateSurface<M> {
    /// Build a surface from validated styles.
    pub fn new(
        bar_style: BarStyle,
        window_style: WindowStyle,
        painter: RunPainter<M>,
    ) -> Result<Self> {
        bar_style.validate()?;
        window_style.validate()?;
        Ok(Self {
            orientation: Orientation::default(),
            preview: true,
            bar: CandidateBar::new(bar_style, painter),
            pager: BarPager::new(),
            popup: PopupController::new(PopupPositioner::from_style(&window_style)),
            touch: WindowTouch::new(window_style.movable),
            window: None,
            window_style,
        })
    }

    /// Replace the popup controller (debounce delay, follow support).
    #[must_use]
    pub fn with_popup(mut self, popup: PopupController) -> Self {
        self.popup = popup;
        self
    }

    /// Turn the floating preview on or off. Off, the bar shows every
    /// candidate from the first.
    #[must_use]
    pub fn preview(mut self, enabled: bool) -> Self {
        self.preview = enabled;
        self
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    #[inline]
    pub fn bar(&self) -> &CandidateBar<M> {
        &self.bar
    }

    #[inline]
    pub fn bar_mut(&mut self) -> &mut CandidateBar<M> {
        &mut self.bar
    }

    /// The composed preview window, if one is showing content.
    #[inline]
    pub fn window(&self) -> Option<&ComposedWindow> {
        self.window.as_ref()
    }

    #[inline]
    pub fn popup(&self) -> &PopupController {
        &self.popup
    }

    /// Engine index of the bar's first cell.
    #[inline]
    pub fn bar_start(&self) -> usize {
        self.pager.start()
    }

    /// Swap the bar style. An invalid style is rejected and the current one
    /// stays in place.
    pub fn set_bar_style(&mut self, style: BarStyle) -> Result<()> {
        style.validate()?;
        self.bar.set_style(style);
        Ok(())
    }

    /// Rebuild everything from a new engine snapshot.
    pub fn update(&mut self, snapshot: &EngineSnapshot, now: Instant) -> Option<PopupCommand> {
        let _span = tracing::debug_span!(
            "surface_update",
            candidates = snapshot.candidates.len()
        )
        .entered();

        let window = if self.preview {
            Compositor::new(&self.window_style)
                .orientation(self.orientation)
                .compose(snapshot)
        } else {
            None
        };
        let start = window.as_ref().map_or(0, ComposedWindow::start_num);
        self.pager.resume_at(start, snapshot.candidates.len());
        self.bar.show(snapshot, self.pager.start());

        let command = self.popup.on_content(window.is_some(), now);
        tracing::debug!(
            bar_start = self.pager.start(),
            bar_cells = self.bar.layout().len(),
            preview = window.is_some(),
            "surface updated"
        );
        self.window = window;
        command
    }

    /// Feed a cursor anchor report to the popup.
    ///
    /// On error the previous anchor stays; pass the error to
    /// [`degrade`](Self::degrade) to apply its [`DegradationAction`].
    pub fn on_anchor(&mut self, info: &CursorAnchorInfo, now: Instant) -> Result<()> {
        self.popup.on_anchor(info, now).map_err(Error::from)
    }

    /// Apply the surface-side part of an error's degradation.
    pub fn degrade(&mut self, err: &Error) -> Option<PopupCommand> {
        let action = err.degradation();
        tracing::warn!(error_type = err.error_type(), %action, %err, "degrading");
        match action {
            DegradationAction::HideWindow => {
                self.window = None;
                self.popup.hide()
            }
            DegradationAction::UseDefault
            | DegradationAction::SkipUpdate
            | DegradationAction::KeepPrevious => None,
        }
    }

    /// Pointer event in bar coordinates.
    pub fn on_bar_pointer(&mut self, event: &PointerEvent, now: Instant) -> Option<BarAction> {
        self.bar.on_pointer(event, now)
    }

    /// Pointer event on the preview window.
    ///
    /// `offset` is the buffer offset under the pointer and `origin` the
    /// window's current screen position. A [`WindowAction::MoveWindow`] is
    /// also recorded as the popup's drag position.
    pub fn on_window_pointer(
        &mut self,
        offset: Option<usize>,
        event: &PointerEvent,
        origin: PointF,
    ) -> Option<WindowAction> {
        let window = self.window.as_ref()?;
        let action = self.touch.on_pointer(window, offset, event, origin)?;
        if let WindowAction::MoveWindow { x, y } = action {
            self.popup.on_drag(x, y);
        }
        Some(action)
    }

    /// Fire a due popup show or reposition for a window of `size`.
    pub fn poll(&mut self, now: Instant, area: PopupArea, size: SizeF) -> Option<PopupCommand> {
        self.popup.poll(now, area, size)
    }

    pub fn paint_bar<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.bar.paint(canvas);
    }

    /// Composition ended: clear the bar and hide the preview.
    pub fn hide(&mut self) -> Option<PopupCommand> {
        self.window = None;
        self.pager.reset();
        self.bar.clear();
        self.popup.hide()
    }

    /// Input session ended: hide and forget anchor and drag state.
    pub fn teardown(&mut self) -> Option<PopupCommand> {
        let command = self.hide();
        self.touch = WindowTouch::new(self.window_style.movable);
        command.or(self.popup.teardown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwin_core::{CandidateEntry, CompositionState, EngineFlags, RectF, Transform};
    use cwin_layout::CellTarget;
    use cwin_style::{FontSet, Movable, PopupPosition};
    use cwin_text::{CellMeasurer, RecordingCanvas};
    use cwin_widgets::{AnchorError, InsertionMarker};
    use tracing_test::traced_test;

    fn snapshot() -> EngineSnapshot {
        EngineSnapshot {
            candidates: ["你好", "拟好", "你", "尼"]
                .into_iter()
                .map(CandidateEntry::new)
                .collect(),
            select_labels: (1..=4).map(|i| i.to_string()).collect(),
            highlight_index: Some(0),
            composition: CompositionState::new("ni hao‸", 0, 6),
            raw_input: "nihao".into(),
            flags: EngineFlags::CURSOR_HIGHLIGHT,
            ..EngineSnapshot::default()
        }
    }

    fn surface(window_style: WindowStyle) -> CandidateSurface<CellMeasurer> {
        CandidateSurface::new(
            BarStyle::default(),
            window_style,
            RunPainter::new(CellMeasurer::default(), FontSet::NONE),
        )
        .unwrap()
    }

    fn preview_style() -> WindowStyle {
        WindowStyle::default().min_length(2).min_check(2)
    }

    const AREA: PopupArea = PopupArea::new(1080.0, 1920.0);

    #[test]
    fn bar_resumes_after_preview() {
        let mut s = surface(preview_style());
        let now = Instant::now();
        assert_eq!(s.update(&snapshot(), now), None);
        assert_eq!(s.window().unwrap().start_num(), 2);
        assert_eq!(s.bar_start(), 2);
        assert_eq!(s.bar().page().len(), 2);
        assert_eq!(s.bar().page().entries[0].text, "你");

        let cmd = s.poll(now, AREA, SizeF::new(200.0, 80.0));
        assert_eq!(cmd, Some(PopupCommand::Show { x: 0.0, y: 1840.0 }));
        assert!(s.popup().is_showing());
    }

    #[test]
    fn without_preview_bar_starts_at_zero() {
        let mut s = surface(preview_style()).preview(false);
        s.update(&snapshot(), Instant::now());
        assert!(s.window().is_none());
        assert_eq!(s.bar_start(), 0);
        assert_eq!(s.bar().page().len(), 4);
    }

    #[test]
    fn empty_composition_dismisses() {
        let mut s = surface(preview_style());
        let now = Instant::now();
        s.update(&snapshot(), now);
        s.poll(now, AREA, SizeF::new(100.0, 40.0));

        let mut empty = snapshot();
        empty.composition = CompositionState::default();
        assert_eq!(s.update(&empty, now), Some(PopupCommand::Dismiss));
        assert!(s.window().is_none());
        assert_eq!(s.bar().page().len(), 4);
    }

    #[test]
    fn bar_tap_selects_absolute_index() {
        let mut s = surface(preview_style());
        let now = Instant::now();
        s.update(&snapshot(), now);
        let first = s.bar().layout().cells()[0].rect;
        let (x, y) = (first.center_x(), first.center_y());
        assert_eq!(s.on_bar_pointer(&PointerEvent::down(x, y), now), None);
        assert_eq!(
            s.on_bar_pointer(&PointerEvent::up(x, y), now),
            Some(BarAction::Select(2))
        );
    }

    #[test]
    fn page_arrow_goes_to_the_engine() {
        let mut s = surface(preview_style());
        let now = Instant::now();
        let mut snap = snapshot();
        snap.has_next_page = true;
        s.update(&snap, now);
        let arrow = *s.bar().layout().cells().last().unwrap();
        assert_eq!(arrow.target, CellTarget::PageDown);
        let (x, y) = (arrow.rect.center_x(), arrow.rect.center_y());
        s.on_bar_pointer(&PointerEvent::down(x, y), now);
        assert_eq!(
            s.on_bar_pointer(&PointerEvent::up(x, y), now),
            Some(BarAction::PageDown)
        );
        assert_eq!(s.bar_start(), 2);

        // The engine's next page resumes after whatever the preview takes.
        let mut next = snapshot();
        next.candidates = ["泥", "霓"].into_iter().map(CandidateEntry::new).collect();
        next.has_prev_page = true;
        s.update(&next, now);
        assert_eq!(s.bar_start(), 0);
        assert_eq!(s.bar().page().entries[0].text, "泥");
        assert_eq!(s.bar().layout().cells()[0].target, CellTarget::PageUp);
    }

    #[test]
    fn anchor_follows_cursor() {
        let style = preview_style().position(PopupPosition::Right);
        let mut s = surface(style);
        let now = Instant::now();
        s.update(&snapshot(), now);
        let info = CursorAnchorInfo::composing(
            RectF::new(100.0, 100.0, 110.0, 130.0),
            RectF::new(110.0, 100.0, 120.0, 130.0),
            Transform::IDENTITY,
        );
        s.on_anchor(&info, now).unwrap();
        let cmd = s.poll(now, AREA, SizeF::new(200.0, 80.0));
        assert_eq!(cmd, Some(PopupCommand::Show { x: 120.0, y: 130.0 }));
    }

    #[test]
    #[traced_test]
    fn broken_transform_hides_window() {
        let style = preview_style().position(PopupPosition::Right);
        let mut s = surface(style);
        let now = Instant::now();
        s.update(&snapshot(), now);
        s.poll(now, AREA, SizeF::new(200.0, 80.0));

        let info = CursorAnchorInfo::caret(
            InsertionMarker {
                horizontal: 10.0,
                top: 0.0,
                bottom: 20.0,
            },
            Transform::scale(f32::INFINITY, 1.0),
        );
        let err = s.on_anchor(&info, now).unwrap_err();
        assert_eq!(err, Error::Anchor(AnchorError::NonFiniteTransform));
        assert_eq!(s.degrade(&err), Some(PopupCommand::Dismiss));
        assert!(s.window().is_none());
        assert!(logs_contain("degrading"));
    }

    #[test]
    fn drag_moves_popup() {
        let style = WindowStyle::default()
            .min_length(2)
            .min_check(2)
            .movable(Movable::Always)
            .components(vec![cwin_style::WindowComponent::Move(
                cwin_style::MoveTemplate {
                    label: "⋮".into(),
                    ..Default::default()
                },
            )]);
        let mut s = surface(style);
        let now = Instant::now();
        s.update(&snapshot(), now);
        s.poll(now, AREA, SizeF::new(100.0, 40.0));

        let origin = PointF::new(50.0, 500.0);
        let down = PointerEvent::down(0.0, 0.0).with_raw(60.0, 510.0);
        assert_eq!(s.on_window_pointer(Some(0), &down, origin), None);
        let moved = PointerEvent::moved(0.0, 0.0).with_raw(80.0, 530.0);
        assert_eq!(
            s.on_window_pointer(Some(0), &moved, origin),
            Some(WindowAction::MoveWindow { x: 70.0, y: 520.0 })
        );
    }

    #[test]
    fn invalid_bar_style_keeps_previous() {
        let mut s = surface(WindowStyle::default());
        let err = s.set_bar_style(BarStyle::default().padding(-3.0)).unwrap_err();
        assert_eq!(err.degradation(), DegradationAction::KeepPrevious);
        assert_eq!(s.bar().style().padding, BarStyle::default().padding);
    }

    #[test]
    fn rejects_invalid_styles() {
        let result = CandidateSurface::new(
            BarStyle::default(),
            WindowStyle::default().margins(-1.0, 0.0),
            RunPainter::new(CellMeasurer::default(), FontSet::NONE),
        );
        assert!(matches!(result, Err(Error::Style(_))));
    }

    #[test]
    fn teardown_clears_everything() {
        let mut s = surface(preview_style());
        let now = Instant::now();
        s.update(&snapshot(), now);
        s.poll(now, AREA, SizeF::new(100.0, 40.0));
        assert_eq!(s.teardown(), Some(PopupCommand::Dismiss));
        assert!(s.bar().layout().is_empty());
        assert_eq!(s.bar_start(), 0);

        let mut canvas = RecordingCanvas::new();
        s.paint_bar(&mut canvas);
        assert!(canvas.ops.is_empty());
    }
}
