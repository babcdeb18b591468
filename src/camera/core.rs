use glam::{Mat4, Vec3};

use crate::camera::orientation::OrientationState;
use crate::options::{CameraOptions, Options, PointLightOptions};

/// Projection kind, flipped by the `ToggleProjection` key action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection using the configured field of view.
    #[default]
    Perspective,
    /// Symmetric orthographic box of the configured half extent.
    Orthographic,
}

impl ProjectionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Projection parameters for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Perspective or orthographic.
    pub mode: ProjectionMode,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half-width/height of the orthographic box.
    pub ortho_half_extent: f32,
}

impl Projection {
    /// Projection for a `width` x `height` viewport.
    #[must_use]
    pub fn new(
        mode: ProjectionMode,
        camera: &CameraOptions,
        width: u32,
        height: u32,
    ) -> Self {
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        Self {
            mode,
            aspect,
            fovy: camera.fovy,
            znear: camera.znear,
            zfar: camera.zfar,
            ortho_half_extent: camera.ortho_half_extent,
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let aspect = if self.aspect > 0.0 { self.aspect } else { 1.0 };
        // *_rh variants use the [0,1] depth range (wgpu/Vulkan convention)
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.fovy.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_extent;
                Mat4::orthographic_rh(-h, h, -h, h, self.znear, self.zfar)
            }
        }
    }
}

/// Object transform: translate, then pitch about X, then yaw about Y, then
/// scale. Angles are radians.
#[must_use]
pub fn model_matrix(state: &OrientationState) -> Mat4 {
    Mat4::from_translation(state.object_position)
        * Mat4::from_rotation_x(state.pitch)
        * Mat4::from_rotation_y(state.yaw)
        * Mat4::from_scale(state.object_scale)
}

/// Right-handed look-along view from the camera position.
#[must_use]
pub fn view_matrix(state: &OrientationState) -> Mat4 {
    Mat4::look_at_rh(
        state.camera_position,
        state.camera_position + state.camera_forward,
        state.camera_up,
    )
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// One Phong point light as laid out in the shader's uniform block.
pub struct LightUniform {
    /// Light color.
    pub color: [f32; 3],
    /// Ambient contribution scale.
    pub ambient: f32,
    /// World-space position.
    pub position: [f32; 3],
    /// Specular contribution scale.
    pub specular: f32,
    /// Specular exponent.
    pub highlight: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl From<&PointLightOptions> for LightUniform {
    fn from(light: &PointLightOptions) -> Self {
        Self {
            color: light.color,
            ambient: light.ambient,
            position: light.position,
            specular: light.specular,
            highlight: light.highlight,
            _pad: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block for the Phong pass: transforms, eye, and lights.
pub struct SceneUniform {
    /// Object-to-world matrix.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model`, for normals.
    pub normal_matrix: [[f32; 4]; 4],
    /// World-to-view matrix.
    pub view: [[f32; 4]; 4],
    /// View-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub view_position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Base surface color.
    pub object_color: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
    /// Key and fill lights.
    pub lights: [LightUniform; 2],
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self::new(
            &OrientationState::default(),
            &Options::default(),
            Mat4::IDENTITY,
        )
    }
}

impl SceneUniform {
    /// Compose the per-frame block from orientation state, static options,
    /// and a projection matrix.
    #[must_use]
    pub fn new(
        state: &OrientationState,
        options: &Options,
        projection: Mat4,
    ) -> Self {
        let model = model_matrix(state);
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            view: view_matrix(state).to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: state.camera_position.to_array(),
            _pad0: 0.0,
            object_color: options.object.color,
            _pad1: 0.0,
            lights: [
                LightUniform::from(&options.lighting.key),
                LightUniform::from(&options.lighting.fill),
            ],
        }
    }

    /// Combined clip-from-object matrix.
    #[must_use]
    pub fn clip_from_object(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
            * Mat4::from_cols_array_2d(&self.view)
            * Mat4::from_cols_array_2d(&self.model)
    }

    /// Eye position as a vector.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.view_position)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec4;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn toggle_flips_mode() {
        let mode = ProjectionMode::default();
        assert_eq!(mode, ProjectionMode::Perspective);
        assert_eq!(mode.toggled(), ProjectionMode::Orthographic);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn yaw_is_plain_radians() {
        let state = OrientationState {
            yaw: FRAC_PI_2,
            ..OrientationState::default()
        };
        let p = model_matrix(&state).transform_point3(Vec3::X);
        // +X rotates onto -Z, then the object offset of -5 on Z applies.
        assert!((p - Vec3::new(0.0, 0.0, -6.0)).length() < EPS);
    }

    #[test]
    fn pitch_applies_after_yaw() {
        let state = OrientationState {
            yaw: FRAC_PI_2,
            pitch: FRAC_PI_2,
            object_position: Vec3::ZERO,
            ..OrientationState::default()
        };
        // Ry(90) sends +X to -Z, then Rx(90) sends -Z to +Y.
        let p = model_matrix(&state).transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < EPS);
    }

    #[test]
    fn model_scales_last() {
        let state = OrientationState {
            object_position: Vec3::ZERO,
            object_scale: Vec3::splat(2.0),
            ..OrientationState::default()
        };
        let p = model_matrix(&state).transform_point3(Vec3::ONE);
        assert!((p - Vec3::splat(2.0)).length() < EPS);
    }

    #[test]
    fn view_looks_along_forward() {
        let state = OrientationState::default();
        let view = view_matrix(&state);
        // A point straight ahead lands on the view-space -Z axis.
        let ahead = state.camera_position + state.camera_forward;
        let v = view.transform_point3(ahead);
        assert!(v.x.abs() < EPS && v.y.abs() < EPS);
        assert!(v.z < 0.0);
    }

    #[test]
    fn object_is_visible_in_both_projections() {
        let options = Options::default();
        let state =
            OrientationState::from_options(&options.camera, &options.object);
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic]
        {
            let proj = Projection::new(mode, &options.camera, 800, 600);
            let uniform =
                SceneUniform::new(&state, &options, proj.build_matrix());
            let clip = uniform.clip_from_object() * Vec4::W;
            let ndc = clip.truncate() / clip.w;
            assert!(ndc.x.abs() < EPS && ndc.y.abs() < EPS, "{mode:?}");
            assert!((0.0..=1.0).contains(&ndc.z), "{mode:?}");
        }
    }

    #[test]
    fn orthographic_ignores_aspect() {
        let camera = CameraOptions::default();
        let ortho = ProjectionMode::Orthographic;
        let wide = Projection::new(ortho, &camera, 1600, 400);
        let square = Projection::new(ortho, &camera, 400, 400);
        assert_eq!(wide.build_matrix(), square.build_matrix());

        let persp =
            Projection::new(ProjectionMode::Perspective, &camera, 1600, 400);
        assert_ne!(persp.build_matrix(), wide.build_matrix());
    }

    #[test]
    fn zero_sized_viewport_falls_back_to_square() {
        let camera = CameraOptions::default();
        let proj = Projection::new(ProjectionMode::Perspective, &camera, 0, 0);
        assert_eq!(proj.aspect, 1.0);
        assert!(proj.build_matrix().is_finite());
    }

    #[test]
    fn uniform_carries_eye_and_lights() {
        let options = Options::default();
        let mut state = OrientationState::default();
        state.camera_position = Vec3::new(1.0, 2.0, 3.0);
        let uniform = SceneUniform::new(&state, &options, Mat4::IDENTITY);
        assert_eq!(uniform.eye(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(uniform.lights[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(uniform.lights[1].position, [-3.0, 0.5, 0.0]);
        assert_eq!(size_of::<SceneUniform>() % 16, 0);
        assert_eq!(size_of::<LightUniform>(), 48);
    }
}
