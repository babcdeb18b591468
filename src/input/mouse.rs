use glam::Vec2;

use super::event::MouseButton;

/// Which manipulation a pointer drag currently drives.
///
/// Derived from [`ButtonState`] on every button change; drags only reach
/// the orientation state while the mode is not [`DragMode::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// No alt+button combination held; drags are ignored.
    #[default]
    Idle,
    /// Alt + left button: drag rotates the object (yaw/pitch).
    OrientDrag,
    /// Alt + right button: vertical drag dollies the camera along its
    /// forward vector.
    ZoomDrag,
}

/// Left/right button flags plus the alt modifier sampled at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Whether the left button is held.
    pub left: bool,
    /// Whether the right button is held.
    pub right: bool,
    /// Whether alt was held when the most recent button went down.
    ///
    /// Always `false` while both buttons are up.
    pub alt: bool,
}

impl ButtonState {
    /// Current drag mode. Left wins when both buttons are held.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        if !self.alt {
            DragMode::Idle
        } else if self.left {
            DragMode::OrientDrag
        } else if self.right {
            DragMode::ZoomDrag
        } else {
            DragMode::Idle
        }
    }
}

/// Last pointer position and the pending-baseline flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last observed pointer position in window pixels.
    pub last: Vec2,
    /// When set, the next motion only establishes a new baseline.
    pub pending_reset: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            last: Vec2::ZERO,
            pending_reset: true,
        }
    }
}

impl PointerState {
    /// Consume a motion sample and return the raw delta, with Y flipped so
    /// that dragging upward is positive.
    pub fn motion(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let delta = if self.pending_reset {
            self.pending_reset = false;
            Vec2::ZERO
        } else {
            Vec2::new(current.x - self.last.x, self.last.y - current.y)
        };
        self.last = current;
        delta
    }
}

/// Raw pointer and button state tracked across events.
///
/// Converts discrete button/motion notifications into clean per-motion
/// deltas: the first motion after any button release yields a zero delta
/// so a new drag never starts with a jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pointer: PointerState,
    buttons: ButtonState,
    mode: DragMode,
}

impl InputState {
    /// Create a fresh state with no buttons held and the baseline unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button transition.
    ///
    /// Any release re-arms the baseline. Left/right releases also drop the
    /// alt modifier; a left/right press latches `alt_held` as the modifier
    /// for the drag that follows. Other buttons never change the flags.
    pub fn on_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        alt_held: bool,
    ) {
        match button {
            MouseButton::Left => self.buttons.left = pressed,
            MouseButton::Right => self.buttons.right = pressed,
            MouseButton::Middle | MouseButton::Other => {
                if !pressed {
                    self.pointer.pending_reset = true;
                }
                return;
            }
        }

        if pressed {
            self.buttons.alt = alt_held;
        } else {
            self.pointer.pending_reset = true;
            self.buttons.alt = false;
        }
        self.mode = self.buttons.drag_mode();
    }

    /// Record a pointer motion and return the unscaled `(dx, dy)` delta.
    pub fn on_motion(&mut self, x: f32, y: f32) -> Vec2 {
        self.pointer.motion(x, y)
    }

    /// Current button/modifier flags.
    #[must_use]
    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// Drag mode computed at the last button change.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_motion_only_sets_baseline() {
        let mut state = InputState::new();
        assert_eq!(state.on_motion(400.0, 300.0), Vec2::ZERO);
        assert_eq!(state.on_motion(410.0, 290.0), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn release_rearms_baseline() {
        let mut state = InputState::new();
        let _ = state.on_motion(390.0, 300.0);
        let _ = state.on_motion(400.0, 300.0);
        state.on_button(MouseButton::Left, true, true);
        state.on_button(MouseButton::Left, false, true);
        state.on_button(MouseButton::Left, true, true);

        assert_eq!(state.on_motion(550.0, 250.0), Vec2::ZERO);
        assert_eq!(state.on_motion(555.0, 260.0), Vec2::new(5.0, -10.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let mut state = InputState::new();
        let _ = state.on_motion(0.0, 100.0);
        // Screen Y grows downward; moving up is a positive delta.
        assert_eq!(state.on_motion(0.0, 80.0).y, 20.0);
    }

    #[test]
    fn alt_cleared_when_buttons_up() {
        let mut state = InputState::new();
        state.on_button(MouseButton::Right, true, true);
        assert!(state.buttons().alt);
        assert_eq!(state.mode(), DragMode::ZoomDrag);

        state.on_button(MouseButton::Right, false, true);
        assert!(!state.buttons().alt);
        assert!(!state.buttons().left && !state.buttons().right);
        assert_eq!(state.mode(), DragMode::Idle);
    }

    #[test]
    fn press_without_alt_stays_idle() {
        let mut state = InputState::new();
        state.on_button(MouseButton::Left, true, false);
        assert_eq!(state.mode(), DragMode::Idle);
    }

    #[test]
    fn left_takes_priority_over_right() {
        let buttons = ButtonState {
            left: true,
            right: true,
            alt: true,
        };
        assert_eq!(buttons.drag_mode(), DragMode::OrientDrag);
    }

    #[test]
    fn middle_release_rearms_without_touching_buttons() {
        let mut state = InputState::new();
        state.on_button(MouseButton::Left, true, true);
        let _ = state.on_motion(10.0, 10.0);
        state.on_button(MouseButton::Middle, true, false);
        state.on_button(MouseButton::Middle, false, false);

        assert_eq!(state.on_motion(110.0, 10.0), Vec2::ZERO);
        assert_eq!(state.on_motion(112.0, 10.0), Vec2::new(2.0, 0.0));
        assert!(state.buttons().left && state.buttons().alt);
        assert_eq!(state.mode(), DragMode::OrientDrag);
    }

    #[test]
    fn other_buttons_never_start_or_end_a_drag() {
        let mut state = InputState::new();
        state.on_button(MouseButton::Other, true, true);
        assert_eq!(state.mode(), DragMode::Idle);
        assert_eq!(state.buttons(), ButtonState::default());

        state.on_button(MouseButton::Left, true, true);
        state.on_button(MouseButton::Other, true, false);
        state.on_button(MouseButton::Other, false, false);
        assert_eq!(state.mode(), DragMode::OrientDrag);
        assert!(state.buttons().alt);
    }
}
