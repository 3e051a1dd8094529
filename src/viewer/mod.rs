//! One award viewer session.
//!
//! The [`Viewer`] owns everything a presentation needs between frames: the
//! slide deck, the rotation controller, and the resume and auto-advance
//! timers. The host drives it:
//!
//! ```ignore
//! let mut viewer = Viewer::new(&options, Instant::now())?;
//! // input handlers
//! viewer.execute(ViewerCommand::NextSlide, Instant::now());
//! // every rendered frame
//! let frame = viewer.update(Instant::now(), dt);
//! trophy.set_yaw(frame.yaw);
//! ```
//!
//! "Auto" covers both presentation styles: [`AutoMode::Spin`] spins the
//! trophy continuously, [`AutoMode::Advance`] steps through slides on an
//! interval. Manual slide changes pause auto and re-enable it after a quiet
//! period when `pause_on_interaction` is set.

/// Viewer command vocabulary.
pub mod command;
/// Resume and auto-advance deadline timers.
pub mod timer;

use std::path::Path;

pub use command::ViewerCommand;
use timer::{AdvanceTimer, ResumeTimer};
use web_time::Instant;

use crate::asset::ModelSource;
use crate::carousel::{Slide, SlideDeck, SlidePosition};
use crate::error::PlinthError;
use crate::options::{AutoMode, Options};
use crate::rotation::RotationController;

/// Per-frame output for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerFrame {
    /// Yaw in radians to apply to the trophy.
    pub yaw: f32,
    /// Selected slide and deck size.
    pub position: SlidePosition,
    /// Whether auto is currently on.
    pub auto_active: bool,
    /// Whether auto is paused and waiting to resume.
    pub resume_pending: bool,
}

/// A single presentation: deck, rotation, and auto timers.
#[derive(Debug, Clone)]
pub struct Viewer {
    deck: SlideDeck,
    rotation: RotationController,
    auto_mode: AutoMode,
    auto_enabled: bool,
    pause_on_interaction: bool,
    resume: ResumeTimer,
    advance: AdvanceTimer,
    model: ModelSource,
}

impl Viewer {
    /// Start a session from options. Auto starts per
    /// `carousel.auto_start`; in advance mode the first advance is one
    /// interval after `now`.
    pub fn new(options: &Options, now: Instant) -> Result<Self, PlinthError> {
        let deck = options.slide_deck()?;
        let rotation =
            RotationController::new(deck.angles(), &options.rotation, false)?;

        let mut viewer = Self {
            deck,
            rotation,
            auto_mode: options.carousel.auto_mode,
            auto_enabled: false,
            pause_on_interaction: options.carousel.pause_on_interaction,
            resume: ResumeTimer::new(options.carousel.resume_delay()),
            advance: AdvanceTimer::new(options.carousel.advance_interval()),
            model: ModelSource::default(),
        };
        viewer.apply_auto(options.carousel.auto_start, now);

        log::debug!(
            "viewer started with {} slides, auto {:?} {}",
            viewer.deck.len(),
            viewer.auto_mode,
            if viewer.auto_enabled { "on" } else { "off" }
        );
        Ok(viewer)
    }

    /// Execute a command at `now`.
    pub fn execute(&mut self, command: ViewerCommand, now: Instant) {
        let active = self.rotation.active_slide();
        match command {
            ViewerCommand::PreviousSlide | ViewerCommand::NextSlide => {
                let delta = if command == ViewerCommand::NextSlide { 1 } else { -1 };
                let target = self.deck.step(active, delta);
                // A clamped press at either end is not an interaction.
                if target != active {
                    self.navigate(target, now);
                }
            }
            ViewerCommand::GoToSlide { index } => {
                self.navigate(self.deck.wrap_index(index), now);
            }
            ViewerCommand::ToggleAutoRotate => {
                self.resume.cancel();
                self.apply_auto(!self.auto_enabled, now);
            }
            ViewerCommand::SetAutoRotate { enabled } => {
                self.resume.cancel();
                self.apply_auto(enabled, now);
            }
        }
    }

    /// Advance one frame: fire due timers, then tick the rotation.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame.
    pub fn update(&mut self, now: Instant, dt: f32) -> ViewerFrame {
        if self.resume.poll(now) {
            log::info!("no interaction for a while, resuming auto");
            self.apply_auto(true, now);
        }

        if self.advance.poll(now) {
            let next = self.deck.wrap(self.rotation.active_slide() as isize + 1);
            self.rotation.select_slide(next as isize);
        }

        let yaw = self.rotation.tick(dt);
        ViewerFrame {
            yaw,
            position: self.position(),
            auto_active: self.auto_enabled,
            resume_pending: self.resume.is_pending(),
        }
    }

    /// Probe the award model at `path` and remember the outcome.
    pub fn load_model(&mut self, path: &Path) -> &ModelSource {
        self.model = ModelSource::probe(path);
        &self.model
    }

    /// What the host should render for the trophy.
    #[must_use]
    pub fn model(&self) -> &ModelSource {
        &self.model
    }

    /// The slide deck.
    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// The rotation controller.
    #[must_use]
    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    /// Index of the selected slide.
    #[must_use]
    pub fn active_slide(&self) -> usize {
        self.rotation.active_slide()
    }

    /// The selected slide.
    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides()[self.rotation.active_slide()]
    }

    /// Selected slide and deck size, for "Slide 3 of 5" indicators.
    #[must_use]
    pub fn position(&self) -> SlidePosition {
        self.deck.position(self.rotation.active_slide())
    }

    /// Whether auto is on.
    #[must_use]
    pub fn is_auto_enabled(&self) -> bool {
        self.auto_enabled
    }

    /// What auto does in this session.
    #[must_use]
    pub fn auto_mode(&self) -> AutoMode {
        self.auto_mode
    }

    /// Whether auto is paused by an interaction and waiting to resume.
    #[must_use]
    pub fn resume_pending(&self) -> bool {
        self.resume.is_pending()
    }

    /// Whether the "previous" control should be enabled.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.deck.can_go_previous(self.rotation.active_slide())
    }

    /// Whether the "next" control should be enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.deck.can_go_next(self.rotation.active_slide())
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// Manual slide change.
    fn navigate(&mut self, index: usize, now: Instant) {
        self.rotation.select_slide(index as isize);
        log::debug!("{}", self.position());

        if self.pause_on_interaction {
            self.apply_auto(false, now);
            self.resume.arm(now);
        } else if self.auto_enabled && self.auto_mode == AutoMode::Advance {
            self.advance.start(now);
        }
    }

    fn apply_auto(&mut self, enabled: bool, now: Instant) {
        if enabled != self.auto_enabled {
            log::info!(
                "auto {:?} {}",
                self.auto_mode,
                if enabled { "on" } else { "off" }
            );
        }
        self.auto_enabled = enabled;
        match self.auto_mode {
            AutoMode::Spin => {
                self.rotation.set_auto_rotate(enabled);
                self.advance.stop();
            }
            AutoMode::Advance => {
                self.rotation.set_auto_rotate(false);
                if enabled {
                    self.advance.start(now);
                } else {
                    self.advance.stop();
                }
            }
        }
    }
}
