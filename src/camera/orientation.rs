use glam::{Vec2, Vec3};

use crate::input::{ButtonState, DragMode};
use crate::options::{CameraOptions, ControlOptions, ObjectOptions};

/// Object orientation and camera placement, read by the render step once
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationState {
    /// Object rotation about the Y axis, in radians.
    pub yaw: f32,
    /// Object rotation about the X axis, in radians.
    pub pitch: f32,
    /// Eye position in world space.
    pub camera_position: Vec3,
    /// Look direction. Not normalized: its length sets the zoom step.
    pub camera_forward: Vec3,
    /// Up direction vector.
    pub camera_up: Vec3,
    /// Object translation.
    pub object_position: Vec3,
    /// Object scale.
    pub object_scale: Vec3,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), &ObjectOptions::default())
    }
}

impl OrientationState {
    /// Initial state for the given camera and object placement.
    #[must_use]
    pub fn from_options(
        camera: &CameraOptions,
        object: &ObjectOptions,
    ) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            camera_position: Vec3::from_array(camera.position),
            camera_forward: Vec3::from_array(camera.forward),
            camera_up: Vec3::from_array(camera.up),
            object_position: Vec3::from_array(object.position),
            object_scale: Vec3::from_array(object.scale),
        }
    }

    /// Apply one raw pointer delta under the drag mode implied by `buttons`.
    ///
    /// Without the alt modifier this is a no-op. With alt + left the scaled
    /// delta is added to yaw (x) and pitch (y) and each is hard-clamped to
    /// `±controls.angle_limit`. With alt + right the camera steps along its
    /// forward vector: forward when `delta.y > 0`, backward otherwise.
    pub fn apply_drag(
        &mut self,
        delta: Vec2,
        buttons: &ButtonState,
        controls: &ControlOptions,
    ) {
        self.apply_drag_mode(delta, buttons.drag_mode(), controls);
    }

    /// [`apply_drag`](Self::apply_drag) with a precomputed [`DragMode`].
    pub fn apply_drag_mode(
        &mut self,
        delta: Vec2,
        mode: DragMode,
        controls: &ControlOptions,
    ) {
        match mode {
            DragMode::Idle => {}
            DragMode::OrientDrag => {
                self.orient(delta * controls.sensitivity, controls.angle_limit);
            }
            DragMode::ZoomDrag => self.zoom(delta.y, controls.camera_speed),
        }
    }

    fn orient(&mut self, scaled: Vec2, limit: f32) {
        let limit = limit.abs();
        self.yaw = (self.yaw + scaled.x).clamp(-limit, limit);
        self.pitch = (self.pitch + scaled.y).clamp(-limit, limit);
    }

    fn zoom(&mut self, vertical: f32, speed: f32) {
        let step = speed * self.camera_forward;
        if vertical > 0.0 {
            self.camera_position += step;
        } else {
            self.camera_position -= step;
        }
    }
}
