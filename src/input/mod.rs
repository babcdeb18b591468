//! Input handling: event types, the pointer/button state machine, and the
//! processor that feeds raw window events into an [`InputSink`].

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Pointer baseline tracking and button/modifier state.
pub mod mouse;
/// Routes raw events to a sink and resolves key presses.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use mouse::{ButtonState, DragMode, InputState, PointerState};
pub use processor::InputProcessor;

/// Receiver of discrete pointer notifications.
///
/// The window layer holds a `&mut dyn InputSink` and calls into it; the
/// sink never needs to know about the window.
pub trait InputSink {
    /// A mouse button changed state. `alt_held` is the alt modifier as
    /// reported by the platform at the moment of the transition.
    fn on_button(&mut self, button: MouseButton, pressed: bool, alt_held: bool);

    /// The pointer moved to `(x, y)` in window pixels.
    fn on_motion(&mut self, x: f32, y: f32);
}
