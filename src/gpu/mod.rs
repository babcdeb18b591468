//! GPU resource management for the demo viewer.
//!
//! Provides wgpu device/surface initialization and the depth attachment.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment texture.
pub mod texture;
