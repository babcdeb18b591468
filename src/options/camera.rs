use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement and projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Half-width and half-height of the orthographic view volume.
    #[schemars(title = "Ortho Extent", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub ortho_half_extent: f32,
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look direction. Its length also sets the zoom step size.
    #[schemars(skip)]
    pub forward: [f32; 3],
    /// Up direction vector.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_extent: 3.0,
            position: [0.0, 0.0, 0.0],
            forward: [0.0, 0.0, -5.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Object", inline)]
#[serde(default)]
/// Placement and base color of the manipulated object.
pub struct ObjectOptions {
    /// World-space translation applied before rotation.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Per-axis scale applied after rotation.
    #[schemars(skip)]
    pub scale: [f32; 3],
    /// Base surface color.
    #[schemars(skip)]
    pub color: [f32; 3],
}

impl Default for ObjectOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -5.0],
            scale: [1.0, 1.0, 1.0],
            color: [0.6, 0.5, 0.75],
        }
    }
}
