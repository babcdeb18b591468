use crate::camera::orientation::OrientationState;
use crate::input::{DragMode, InputSink, InputState, MouseButton};
use crate::options::{ControlOptions, Options};

/// Drag-driven object orientation and camera dolly.
///
/// Owns the raw input state, the orientation it drives, and the control
/// constants. Window layers feed it through [`InputSink`]; the render step
/// reads [`state`](Self::state) once per frame.
#[derive(Debug, Clone)]
pub struct OrientationController {
    input: InputState,
    state: OrientationState,
    initial: OrientationState,
    controls: ControlOptions,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new(OrientationState::default(), ControlOptions::default())
    }
}

impl OrientationController {
    /// Create a controller starting from `initial`.
    #[must_use]
    pub fn new(initial: OrientationState, controls: ControlOptions) -> Self {
        Self {
            input: InputState::new(),
            state: initial,
            initial,
            controls,
        }
    }

    /// Create a controller from the camera, object, and control sections of
    /// `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(
            OrientationState::from_options(&options.camera, &options.object),
            options.controls.clone(),
        )
    }

    /// Current orientation and camera placement.
    #[must_use]
    pub fn state(&self) -> &OrientationState {
        &self.state
    }

    /// Current drag mode.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.input.mode()
    }

    /// Raw pointer/button state.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Control constants in effect.
    #[must_use]
    pub fn controls(&self) -> &ControlOptions {
        &self.controls
    }

    /// Replace the control constants. Takes effect on the next drag.
    pub fn set_controls(&mut self, controls: ControlOptions) {
        self.controls = controls;
    }

    /// Restore the orientation the controller was created with.
    ///
    /// Button state is left alone so an in-progress drag continues from the
    /// restored orientation.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }
}

impl InputSink for OrientationController {
    fn on_button(&mut self, button: MouseButton, pressed: bool, alt_held: bool) {
        self.input.on_button(button, pressed, alt_held);
        log::trace!("drag mode -> {:?}", self.input.mode());
    }

    fn on_motion(&mut self, x: f32, y: f32) {
        let delta = self.input.on_motion(x, y);
        let mode = self.input.mode();
        if mode == DragMode::Idle {
            return;
        }
        self.state.apply_drag_mode(delta, mode, &self.controls);
        log::trace!(
            "{mode:?}: yaw={:.3} pitch={:.3} eye={}",
            self.state.yaw,
            self.state.pitch,
            self.state.camera_position
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-5;

    fn drag(
        controller: &mut OrientationController,
        button: MouseButton,
        alt: bool,
        path: &[(f32, f32)],
    ) {
        controller.on_button(button, true, alt);
        for &(x, y) in path {
            controller.on_motion(x, y);
        }
        controller.on_button(button, false, alt);
    }

    #[test]
    fn plain_drag_is_ignored() {
        let mut controller = OrientationController::default();
        let before = *controller.state();
        drag(
            &mut controller,
            MouseButton::Left,
            false,
            &[(0.0, 0.0), (50.0, 80.0), (-30.0, 10.0)],
        );
        drag(
            &mut controller,
            MouseButton::Right,
            false,
            &[(0.0, 0.0), (0.0, -80.0)],
        );
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn alt_left_drag_orients() {
        let mut controller = OrientationController::default();
        drag(
            &mut controller,
            MouseButton::Left,
            true,
            &[(400.0, 300.0), (410.0, 310.0)],
        );
        // First motion is the baseline; second is (+10, -10) raw.
        assert!((controller.state().yaw - 0.5).abs() < EPS);
        assert!((controller.state().pitch + 0.5).abs() < EPS);
    }

    #[test]
    fn new_drag_does_not_jump() {
        let mut controller = OrientationController::default();
        drag(
            &mut controller,
            MouseButton::Left,
            true,
            &[(400.0, 300.0), (400.0, 300.0)],
        );
        assert_eq!(controller.state().yaw, 0.0);

        controller.on_button(MouseButton::Left, true, true);
        controller.on_motion(550.0, 250.0);
        assert_eq!(controller.state().yaw, 0.0);
        assert_eq!(controller.state().pitch, 0.0);

        controller.on_motion(560.0, 250.0);
        assert!((controller.state().yaw - 0.5).abs() < EPS);
    }

    #[test]
    fn alt_right_drag_zooms() {
        let mut controller = OrientationController::default();
        let start = controller.state().camera_position;
        let forward = controller.state().camera_forward;

        controller.on_button(MouseButton::Right, true, true);
        controller.on_motion(100.0, 100.0);
        // Baseline motion has dy = 0, which counts as a backward step.
        assert!(
            (controller.state().camera_position - (start - 0.01 * forward))
                .length()
                < EPS
        );
        controller.on_motion(100.0, 95.0);
        controller.on_motion(100.0, 90.0);
        assert!(
            (controller.state().camera_position - (start + 0.01 * forward))
                .length()
                < EPS
        );
    }

    #[test]
    fn release_returns_to_idle() {
        let mut controller = OrientationController::default();
        controller.on_button(MouseButton::Left, true, true);
        assert_eq!(controller.mode(), DragMode::OrientDrag);
        controller.on_button(MouseButton::Left, false, true);
        assert_eq!(controller.mode(), DragMode::Idle);

        controller.on_motion(0.0, 0.0);
        controller.on_motion(100.0, 100.0);
        assert_eq!(controller.state().yaw, 0.0);
    }

    #[test]
    fn side_button_click_keeps_orient_drag() {
        let mut controller = OrientationController::default();
        controller.on_button(MouseButton::Left, true, true);
        controller.on_motion(0.0, 0.0);
        controller.on_button(MouseButton::Other, true, true);
        controller.on_button(MouseButton::Other, false, true);
        assert_eq!(controller.mode(), DragMode::OrientDrag);

        // The release re-arms the baseline, so the jump is swallowed.
        controller.on_motion(100.0, 0.0);
        assert_eq!(controller.state().yaw, 0.0);
        controller.on_motion(120.0, 0.0);
        assert!(controller.state().yaw > 0.0);
    }

    #[test]
    fn yaw_is_clamped_across_many_motions() {
        let mut controller = OrientationController::default();
        controller.on_button(MouseButton::Left, true, true);
        controller.on_motion(0.0, 0.0);
        for i in 1..=100 {
            controller.on_motion(i as f32 * 10.0, 0.0);
        }
        assert_eq!(controller.state().yaw, PI);
    }

    #[test]
    fn reset_restores_initial_state() {
        let options = Options::default();
        let mut controller = OrientationController::from_options(&options);
        drag(
            &mut controller,
            MouseButton::Left,
            true,
            &[(0.0, 0.0), (30.0, 30.0)],
        );
        assert_ne!(controller.state().yaw, 0.0);

        controller.reset();
        assert_eq!(controller.state().yaw, 0.0);
        assert_eq!(controller.state().pitch, 0.0);
        assert_eq!(controller.state().camera_position, Vec3::ZERO);
    }

    #[test]
    fn custom_sensitivity_applies() {
        let mut controller = OrientationController::default();
        controller.set_controls(ControlOptions {
            sensitivity: 0.01,
            ..ControlOptions::default()
        });
        drag(
            &mut controller,
            MouseButton::Left,
            true,
            &[(0.0, 0.0), (20.0, 0.0)],
        );
        assert!((controller.state().yaw - 0.2).abs() < EPS);
    }
}
