use std::fmt;

use serde::{Deserialize, Serialize};

/// Slide content as written in options files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideSpec {
    /// Award title shown in the carousel.
    pub title: String,
    /// Longer description of the award.
    #[serde(default)]
    pub description: String,
}

impl SlideSpec {
    /// Slide content from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One award in the deck with its resolved target angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Position in the deck, `0..len`.
    pub id: usize,
    /// Award title.
    pub title: String,
    /// Award description.
    pub description: String,
    /// Yaw in radians the trophy turns to for this slide.
    pub angle: f32,
}

/// Zero-based slide index plus deck size, displayed one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    /// Zero-based index.
    pub index: usize,
    /// Number of slides in the deck.
    pub total: usize,
}

impl fmt::Display for SlidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slide {} of {}", self.index + 1, self.total)
    }
}
