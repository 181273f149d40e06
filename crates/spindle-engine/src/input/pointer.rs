use spindle_scene::{TouchAction, TouchEvent};

/// Phase of a platform touch contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Folds mouse and touch input into a single-pointer event stream.
///
/// Mouse: the left button acts as the finger. Cursor motion with the button
/// held is a move; without it, a hover. Touch: only the first contact is
/// tracked until it ends; additional fingers are ignored.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Last cursor position in physical pixels.
    cursor: Option<(f32, f32)>,

    /// Whether the left mouse button is held.
    button_down: bool,

    /// Id of the touch contact currently driving the pointer.
    active_touch: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor moved to `(x, y)`.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> TouchEvent {
        self.cursor = Some((x, y));
        let action = if self.button_down {
            TouchAction::Move
        } else {
            TouchAction::Hover
        };
        TouchEvent::new(action, x, y)
    }

    /// Cursor left the window. A held drag is cancelled.
    pub fn cursor_left(&mut self) -> Option<TouchEvent> {
        let (x, y) = self.cursor.take()?;
        if !self.button_down {
            return None;
        }
        self.button_down = false;
        Some(TouchEvent::new(TouchAction::Cancel, x, y))
    }

    /// Left mouse button changed state.
    ///
    /// Returns `None` when the cursor position is unknown or the state did not
    /// change.
    pub fn left_button(&mut self, pressed: bool) -> Option<TouchEvent> {
        if pressed == self.button_down {
            return None;
        }
        let (x, y) = self.cursor?;
        self.button_down = pressed;

        let action = if pressed { TouchAction::Down } else { TouchAction::Up };
        Some(TouchEvent::new(action, x, y))
    }

    /// Touch contact `id` changed.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> Option<TouchEvent> {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(TouchEvent::new(TouchAction::Down, x, y))
            }
            TouchPhase::Moved => {
                (self.active_touch == Some(id)).then(|| TouchEvent::new(TouchAction::Move, x, y))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch != Some(id) {
                    return None;
                }
                self.active_touch = None;
                let action = if phase == TouchPhase::Ended {
                    TouchAction::Up
                } else {
                    TouchAction::Cancel
                };
                Some(TouchEvent::new(action, x, y))
            }
        }
    }

    /// Window lost focus; drop any held button so drags do not get stuck.
    pub fn focus_lost(&mut self) {
        self.button_down = false;
        self.active_touch = None;
    }
}
