//! Touch-to-angle mapping.
//!
//! A single active pointer drives one rotation angle. Every pointer event
//! updates the remembered position; only moves change the angle.

use std::sync::Arc;

use crate::angle::SharedAngle;
use crate::view::ViewSize;

/// Degrees of rotation per pixel of pointer travel (empirical).
pub const TOUCH_SCALE_FACTOR: f32 = 180.0 / 320.0;

/// What the pointer did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchAction {
    /// Pointer went down (finger touched, mouse button pressed).
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer was lifted.
    Up,
    /// Gesture aborted by the platform.
    Cancel,
    /// Pointer moved while not down (mouse hover).
    Hover,
}

/// Pointer event in view-local physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    #[inline]
    pub const fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }
}

/// Asks the host to render another frame.
///
/// Without a request no frame is drawn in on-demand mode.
pub trait RequestRedraw {
    fn request_redraw(&self);
}

/// Converts pointer drags into increments of a shared angle.
#[derive(Debug)]
pub struct TouchRotation {
    angle: Arc<SharedAngle>,
    previous: (f32, f32),
}

impl TouchRotation {
    pub fn new(angle: Arc<SharedAngle>) -> Self {
        Self {
            angle,
            previous: (0.0, 0.0),
        }
    }

    /// The angle this mapper writes to.
    pub fn angle(&self) -> &Arc<SharedAngle> {
        &self.angle
    }

    /// Position recorded from the last event.
    pub fn previous(&self) -> (f32, f32) {
        self.previous
    }

    /// Handles one pointer event.
    ///
    /// Returns the angle increment applied (zero for non-move actions).
    pub fn handle(&mut self, event: TouchEvent, view: ViewSize, redraw: &dyn RequestRedraw) -> f32 {
        let TouchEvent { action, x, y } = event;

        let mut delta = 0.0;
        if action == TouchAction::Move {
            delta = rotation_delta(self.previous, (x, y), view);
            let angle = self.angle.add(delta);
            log::trace!("touch move to ({x}, {y}): delta {delta}, angle {angle}");
            redraw.request_redraw();
        }

        self.previous = (x, y);
        delta
    }
}

/// Angle increment for a move from `previous` to `current`.
///
/// Below the vertical midline horizontal travel is reversed; left of the
/// horizontal midline vertical travel is reversed. Both midlines are
/// exclusive: a pointer exactly on a midline keeps its direction.
pub fn rotation_delta(previous: (f32, f32), current: (f32, f32), view: ViewSize) -> f32 {
    let (x, y) = current;
    let mut dx = x - previous.0;
    let mut dy = y - previous.1;

    if y > view.mid_y() as f32 {
        dx = -dx;
    }

    if x < view.mid_x() as f32 {
        dy = -dy;
    }

    (dx + dy) * TOUCH_SCALE_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRedraw(Cell<u32>);

    impl RequestRedraw for CountingRedraw {
        fn request_redraw(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn mapper() -> TouchRotation {
        TouchRotation::new(Arc::new(SharedAngle::default()))
    }

    fn ev(action: TouchAction, x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(action, x, y)
    }

    const VIEW: ViewSize = ViewSize::new(320, 320);

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn horizontal_drag_in_top_left_rotates_positively() {
        let mut m = mapper();
        let redraw = CountingRedraw::default();

        m.handle(ev(TouchAction::Down, 0.0, 0.0), VIEW, &redraw);
        m.handle(ev(TouchAction::Move, 10.0, 0.0), VIEW, &redraw);

        assert_eq!(m.angle().get(), 5.625);
        assert_eq!(redraw.0.get(), 1);
    }

    #[test]
    fn drag_accumulates_across_moves() {
        let mut m = mapper();
        let redraw = CountingRedraw::default();

        m.handle(ev(TouchAction::Down, 0.0, 0.0), VIEW, &redraw);
        m.handle(ev(TouchAction::Move, 10.0, 0.0), VIEW, &redraw);
        m.handle(ev(TouchAction::Move, 20.0, 0.0), VIEW, &redraw);

        assert_eq!(m.angle().get(), 11.25);
        assert_eq!(redraw.0.get(), 2);
    }

    #[test]
    fn zero_move_keeps_angle_but_requests_redraw() {
        let mut m = mapper();
        m.angle().set(12.5);
        let redraw = CountingRedraw::default();

        m.handle(ev(TouchAction::Down, 40.0, 50.0), VIEW, &redraw);
        let delta = m.handle(ev(TouchAction::Move, 40.0, 50.0), VIEW, &redraw);

        assert_eq!(delta, 0.0);
        assert_eq!(m.angle().get(), 12.5);
        assert_eq!(redraw.0.get(), 1);
    }

    // ── previous position ─────────────────────────────────────────────────

    #[test]
    fn every_action_records_previous_position() {
        let mut m = mapper();
        let redraw = CountingRedraw::default();

        for action in [TouchAction::Down, TouchAction::Up, TouchAction::Cancel, TouchAction::Hover] {
            m.handle(ev(action, 17.0, 23.0), VIEW, &redraw);
            assert_eq!(m.previous(), (17.0, 23.0));
            m.handle(ev(action, 0.0, 0.0), VIEW, &redraw);
        }

        assert_eq!(m.angle().get(), 0.0);
        assert_eq!(redraw.0.get(), 0);
    }

    #[test]
    fn move_without_down_uses_last_seen_position() {
        let mut m = mapper();
        let redraw = CountingRedraw::default();

        m.handle(ev(TouchAction::Hover, 5.0, 0.0), VIEW, &redraw);
        m.handle(ev(TouchAction::Move, 15.0, 0.0), VIEW, &redraw);

        assert_eq!(m.angle().get(), 10.0 * TOUCH_SCALE_FACTOR);
    }

    // ── sign rule ─────────────────────────────────────────────────────────

    #[test]
    fn dx_not_negated_on_vertical_midline() {
        // x kept right of the horizontal midline so dy (zero anyway) is untouched.
        let d = rotation_delta((200.0, 160.0), (210.0, 160.0), VIEW);
        assert_eq!(d, 10.0 * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn dx_negated_below_vertical_midline() {
        let d = rotation_delta((200.0, 161.0), (210.0, 161.0), VIEW);
        assert_eq!(d, -10.0 * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn dy_not_negated_on_horizontal_midline() {
        let d = rotation_delta((160.0, 100.0), (160.0, 110.0), VIEW);
        assert_eq!(d, 10.0 * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn dy_negated_left_of_horizontal_midline() {
        let d = rotation_delta((159.0, 100.0), (159.0, 110.0), VIEW);
        assert_eq!(d, -10.0 * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn both_components_negated_in_bottom_left() {
        let d = rotation_delta((10.0, 300.0), (14.0, 306.0), VIEW);
        assert_eq!(d, (-4.0 - 6.0) * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn midlines_use_integer_halving() {
        // 321 / 2 == 160, so y = 160.5 is already below the midline.
        let view = ViewSize::new(321, 321);
        let d = rotation_delta((200.0, 160.5), (210.0, 160.5), view);
        assert_eq!(d, -10.0 * TOUCH_SCALE_FACTOR);
    }

    #[test]
    fn sign_rule_uses_current_not_previous_position() {
        // Starts above the midline, ends below it: the end point decides.
        let d = rotation_delta((200.0, 150.0), (210.0, 170.0), VIEW);
        assert_eq!(d, (-10.0 + 20.0) * TOUCH_SCALE_FACTOR);
    }
}
