use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeybindingMap", into = "KeybindingMap")]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleProjection` → `"KeyO"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action).
    key_to_action: HashMap<String, KeyAction>,
}

/// Serialized form: only the forward map is persisted.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct KeybindingMap {
    bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingMap {
    fn default() -> Self {
        KeybindingOptions::default().into()
    }
}

impl From<KeybindingMap> for KeybindingOptions {
    fn from(map: KeybindingMap) -> Self {
        Self::from_bindings(map.bindings)
    }
}

impl From<KeybindingOptions> for KeybindingMap {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.bindings,
        }
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (KeyAction::ToggleProjection, "KeyO".into()),
            (KeyAction::ResetView, "KeyR".into()),
        ]))
    }
}

impl KeybindingOptions {
    /// Build options from a forward map, populating the reverse cache.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
