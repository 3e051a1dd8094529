//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (rotation, carousel behaviour, key bindings,
//! development server, slide content) are consolidated here. Options
//! serialize to/from TOML for presets stored in `assets/presets/`.

mod carousel;
mod rotation;
mod server;

use std::path::Path;

pub use carousel::{AutoMode, CarouselOptions};
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use server::ServerOptions;

use crate::carousel::{SlideDeck, SlideSpec};
use crate::error::PlinthError;
use crate::input::KeyBindings;

/// Top-level options container. Every section uses `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Path of the award model, relative to the server root.
    #[schemars(skip)]
    pub model: String,
    /// Trophy rotation parameters.
    pub rotation: RotationOptions,
    /// Slide navigation and auto behaviour.
    pub carousel: CarouselOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
    /// Development server settings.
    #[schemars(skip)]
    pub server: ServerOptions,
    /// Slide content in display order.
    #[schemars(skip)]
    pub slides: Vec<SlideSpec>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            model: "award.glb".into(),
            rotation: RotationOptions::default(),
            carousel: CarouselOptions::default(),
            keybindings: KeyBindings::default(),
            server: ServerOptions::default(),
            slides: default_slides(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PlinthError> {
        let content = std::fs::read_to_string(path).map_err(PlinthError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PlinthError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PlinthError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlinthError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlinthError::Io)?;
        }
        std::fs::write(path, content).map_err(PlinthError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build the slide deck these options describe.
    pub fn slide_deck(&self) -> Result<SlideDeck, PlinthError> {
        let angles = self.rotation.slide_angles(self.slides.len())?;
        SlideDeck::new(self.slides.clone(), &angles, self.carousel.navigation)
    }
}

/// The five awards of the default presentation.
#[must_use]
pub fn default_slides() -> Vec<SlideSpec> {
    vec![
        SlideSpec::new(
            "Exemplary Children's Programs and Services",
            "Recognizing outstanding commitment to community service and public engagement.",
        ),
        SlideSpec::new(
            "Awardee of the 2024 Gawad Pampublikong Aklatan of the National Library of the Philippines",
            "For pioneering digital library services and technological advancement.",
        ),
        SlideSpec::new(
            "Awardee of the 2023 Gawad Pampublikong Aklatan of the National Library of the Philippines",
            "Outstanding efforts in community education and literacy programs.",
        ),
        SlideSpec::new(
            "Library Excellence Award",
            "Exceptional library management and user satisfaction.",
        ),
        SlideSpec::new(
            "Cultural Heritage Preservation",
            "Dedication to preserving and promoting local cultural heritage.",
        ),
    ]
}
