//! Converts platform UI events into viewer commands.
//!
//! The `InputProcessor` owns the key-binding map. It holds no slide state:
//! the viewer is the only source of truth for the selected slide, so every
//! control event becomes a command for
//! [`Viewer::execute`](crate::Viewer::execute).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::viewer::ViewerCommand;

/// Maps key strings to [`ViewerCommand`] variants.
///
/// Key strings use the DOM `KeyboardEvent.code` format: `"ArrowLeft"`,
/// `"KeyR"`, `"Space"`, etc.
///
/// Only parameterless commands can be key-bound; jumping to a specific slide
/// comes from dots and the slider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Go to the previous slide.
    PreviousSlide,
    /// Go to the next slide.
    NextSlide,
    /// Toggle auto mode.
    ToggleAutoRotate,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        match self {
            Self::PreviousSlide => ViewerCommand::PreviousSlide,
            Self::NextSlide => ViewerCommand::NextSlide,
            Self::ToggleAutoRotate => ViewerCommand::ToggleAutoRotate,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowLeft".into(), KeyCommandTag::PreviousSlide),
            ("ArrowRight".into(), KeyCommandTag::NextSlide),
            ("KeyR".into(), KeyCommandTag::ToggleAutoRotate),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).copied().map(KeyCommandTag::to_command)
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`, if any.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts carousel control events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// viewer.execute(input_processor.handle_event(event), now);
///
/// if let Some(cmd) = input_processor.handle_key_press("ArrowRight") {
///     viewer.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key)
    }

    /// Map a control event to its command.
    ///
    /// Every event is forwarded, including a slider value equal to an
    /// earlier one: the viewer may have moved on its own since then.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> ViewerCommand {
        match event {
            InputEvent::PreviousButton => ViewerCommand::PreviousSlide,
            InputEvent::NextButton => ViewerCommand::NextSlide,
            InputEvent::DotClicked { index } | InputEvent::SliderMoved { value: index } => {
                ViewerCommand::GoToSlide { index }
            }
            InputEvent::AutoRotateChecked { checked } => {
                ViewerCommand::SetAutoRotate { enabled: checked }
            }
            InputEvent::AutoRotateButton => ViewerCommand::ToggleAutoRotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_and_dots_map_to_navigation() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::PreviousButton),
            ViewerCommand::PreviousSlide
        );
        assert_eq!(
            input.handle_event(InputEvent::NextButton),
            ViewerCommand::NextSlide
        );
        assert_eq!(
            input.handle_event(InputEvent::DotClicked { index: 3 }),
            ViewerCommand::GoToSlide { index: 3 }
        );
    }

    #[test]
    fn auto_controls_map_to_auto_commands() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::AutoRotateChecked { checked: true }),
            ViewerCommand::SetAutoRotate { enabled: true }
        );
        assert_eq!(
            input.handle_event(InputEvent::AutoRotateButton),
            ViewerCommand::ToggleAutoRotate
        );
    }

    #[test]
    fn repeated_slider_values_are_forwarded() {
        let input = InputProcessor::new();
        let moved = |value| InputEvent::SliderMoved { value };
        assert_eq!(input.handle_event(moved(2)), ViewerCommand::GoToSlide { index: 2 });
        assert_eq!(input.handle_event(moved(2)), ViewerCommand::GoToSlide { index: 2 });
    }

    #[test]
    fn default_key_bindings() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("ArrowLeft"),
            Some(ViewerCommand::PreviousSlide)
        );
        assert_eq!(
            input.handle_key_press("ArrowRight"),
            Some(ViewerCommand::NextSlide)
        );
        assert_eq!(
            input.handle_key_press("KeyR"),
            Some(ViewerCommand::ToggleAutoRotate)
        );
        assert_eq!(input.handle_key_press("Escape"), None);
    }

    #[test]
    fn rebinding_keys() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyD", KeyCommandTag::NextSlide);
        bindings.unbind("ArrowRight");
        let mut input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(input.handle_key_press("KeyD"), Some(ViewerCommand::NextSlide));
        assert_eq!(input.handle_key_press("ArrowRight"), None);
        input.key_bindings_mut().bind("Space", KeyCommandTag::ToggleAutoRotate);
        assert_eq!(
            input.key_bindings().lookup("Space"),
            Some(ViewerCommand::ToggleAutoRotate)
        );
    }

    #[test]
    fn bindings_round_trip_through_toml() {
        let bindings = KeyBindings::default();
        let text = toml::to_string(&bindings).unwrap();
        let parsed: KeyBindings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, bindings);
    }
}
