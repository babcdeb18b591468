//! Converts raw platform events into [`InputSink`] calls.
//!
//! The `InputProcessor` owns the transient modifier state and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! orientation controller.

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::InputSink;
use crate::options::KeybindingOptions;

/// Routes [`InputEvent`]s to an [`InputSink`] and resolves key presses.
///
/// Platforms report modifier changes separately from button presses, so the
/// processor remembers the live alt state and stamps it onto each button
/// transition.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(event, &mut controller);
///
/// if let Some(action) = input_processor.handle_key_press("KeyO") {
///     // apply action
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Whether the alt modifier is currently held.
    alt_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alt_pressed: false,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the alt modifier is held.
    #[must_use]
    pub fn alt_pressed(&self) -> bool {
        self.alt_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding action, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<KeyAction> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event, forwarding pointer activity to `sink`.
    pub fn handle_event(&mut self, event: InputEvent, sink: &mut dyn InputSink) {
        match event {
            InputEvent::CursorMoved { x, y } => sink.on_motion(x, y),
            InputEvent::MouseButton { button, pressed } => {
                sink.on_button(button, pressed, self.alt_pressed);
            }
            InputEvent::ModifiersChanged { alt } => self.alt_pressed = alt,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
