use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Drag sensitivity and camera dolly speed.
pub struct ControlOptions {
    /// Multiplier applied to both axes of a raw pointer delta before it
    /// becomes a yaw/pitch change (radians per pixel).
    #[schemars(title = "Sensitivity", range(min = 0.001, max = 0.2), extend("step" = 0.001))]
    pub sensitivity: f32,
    /// Distance, in multiples of the camera forward vector, moved per
    /// zoom-drag motion event.
    #[schemars(title = "Camera Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub camera_speed: f32,
    /// Yaw and pitch are hard-clamped to `[-angle_limit, angle_limit]`.
    #[schemars(skip)]
    pub angle_limit: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.05,
            camera_speed: 0.01,
            angle_limit: PI,
        }
    }
}
