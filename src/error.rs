//! Crate-level error types.

use std::fmt;

/// Errors produced by the plinth crate.
#[derive(Debug)]
pub enum PlinthError {
    /// A slide deck with no slides was requested.
    EmptyDeck,
    /// A fixed angle table does not have one entry per slide.
    AngleTableMismatch {
        /// Number of slides in the deck.
        slides: usize,
        /// Number of angles in the table.
        angles: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PlinthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDeck => write!(f, "slide deck must contain at least one slide"),
            Self::AngleTableMismatch { slides, angles } => write!(
                f,
                "fixed angle table has {angles} entries for {slides} slides"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PlinthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlinthError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
