//! Camera and object orientation driven by alt-modified mouse drags.
//!
//! Provides the drag state machine, the orientation state it mutates, and
//! the matrix composition the render step consumes.

/// Input-sink implementation that applies drags to the orientation.
pub mod controller;
/// Projection, model/view composition, and GPU uniform types.
pub mod core;
/// Yaw/pitch and camera placement, with the drag application rules.
pub mod orientation;

pub use self::core::{
    model_matrix, view_matrix, LightUniform, Projection, ProjectionMode,
    SceneUniform,
};
pub use controller::OrientationController;
pub use orientation::OrientationState;
