//! Input handling: carousel control events and the processor that converts
//! them (and key presses) into viewer commands.

/// Platform-agnostic control events.
pub mod event;
/// Converts events and key presses into commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
