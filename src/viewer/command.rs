//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a carousel
//! button, a dot, the slider, or a programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`Viewer::execute`](super::Viewer::execute).

/// A discrete operation the viewer can perform.
///
/// The viewer never cares *how* a command was triggered:
///
/// ```ignore
/// viewer.execute(ViewerCommand::NextSlide, now);
/// viewer.execute(ViewerCommand::GoToSlide { index: 2 }, now);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    // ── Navigation ──────────────────────────────────────────────────
    /// Go to the previous slide.
    PreviousSlide,

    /// Go to the next slide.
    NextSlide,

    /// Jump to a slide. Out-of-range indices wrap.
    GoToSlide {
        /// Zero-based slide index.
        index: usize,
    },

    // ── Auto ────────────────────────────────────────────────────────
    /// Flip auto mode on or off.
    ToggleAutoRotate,

    /// Set auto mode explicitly.
    SetAutoRotate {
        /// Whether auto should be on.
        enabled: bool,
    },
}

impl ViewerCommand {
    /// Whether this command changes the selected slide.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::PreviousSlide | Self::NextSlide | Self::GoToSlide { .. }
        )
    }
}
