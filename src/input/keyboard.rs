use serde::{Deserialize, Serialize};

/// Viewer-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_projection = "KeyO"
/// reset_view = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip between perspective and orthographic projection.
    ToggleProjection,
    /// Restore the initial object orientation and camera position.
    ResetView,
}
