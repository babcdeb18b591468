// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Alt-drag orientation controller for simple lit-mesh scenes.
//!
//! Swivel turns a stream of mouse button and pointer-motion notifications
//! into an object orientation (yaw/pitch) and a camera position, and
//! composes them into the model/view/projection matrices a Phong shader
//! consumes.
//!
//! # Key entry points
//!
//! - [`input::InputSink`] - the event-ingestion seam a window layer calls into
//! - [`camera::OrientationController`] - drag-to-orientation state machine
//! - [`camera::SceneUniform`] - per-frame transform and lighting block
//! - [`options::Options`] - TOML-loadable sensitivity, camera, lighting, and
//!   keybinding configuration
//!
//! With the `viewer` feature, `Viewer` opens a winit window and draws a lit
//! cube driven by the controller.

pub mod camera;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
mod viewer;

pub use camera::{
    OrientationController, OrientationState, ProjectionMode, SceneUniform,
};
pub use error::SwivelError;
pub use input::{InputEvent, InputProcessor, InputSink, KeyAction, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
