//! Centralized control/display options with TOML preset support.
//!
//! All tweakable settings (drag sensitivity, camera placement and
//! projection, object placement, lighting, keybindings) are consolidated
//! here. Options serialize to/from TOML so a viewer session can be started
//! from a preset file.

mod camera;
mod controls;
mod keybindings;
mod lighting;

use std::path::Path;

pub use camera::{CameraOptions, ObjectOptions};
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::{LightingOptions, PointLightOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SwivelError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag sensitivity and zoom speed.
    pub controls: ControlOptions,
    /// Camera placement and projection parameters.
    pub camera: CameraOptions,
    /// Manipulated object placement and color.
    pub object: ObjectOptions,
    /// Phong light parameters.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SwivelError> {
        let content = std::fs::read_to_string(path).map_err(SwivelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SwivelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SwivelError::Io)?;
        }
        std::fs::write(path, content).map_err(SwivelError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
sensitivity = 0.1
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.controls.sensitivity, 0.1);
        // Everything else should be default
        assert_eq!(opts.controls.camera_speed, 0.01);
        assert_eq!(opts.camera.forward, [0.0, 0.0, -5.0]);
        assert_eq!(opts.lighting.key.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_rebuild_reverse_map() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
toggle_projection = "KeyP"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyP"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("KeyO"), None);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/swivel.toml"))
            .unwrap_err();
        assert!(matches!(err, SwivelError::Io(_)));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join("swivel-options-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[controls\nsensitivity = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, SwivelError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("swivel-options-save");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.controls.camera_speed = 0.02;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("controls"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("sensitivity").is_some());
        assert!(controls.get("angle_limit").is_none());
    }
}
