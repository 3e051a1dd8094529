use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::carousel::Navigation;

/// What "auto" means for the viewer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AutoMode {
    /// The trophy spins continuously.
    #[default]
    Spin,
    /// The carousel advances to the next slide on a fixed interval.
    Advance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Carousel", inline)]
#[serde(default)]
/// Slide navigation and auto behaviour.
pub struct CarouselOptions {
    /// Whether auto is on when the viewer starts.
    #[schemars(title = "Auto on Start")]
    pub auto_start: bool,
    /// Spin the trophy or advance slides while auto is on.
    #[schemars(title = "Auto Mode")]
    pub auto_mode: AutoMode,
    /// Seconds between slide advances in advance mode.
    #[schemars(title = "Advance Interval", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub advance_interval_secs: f32,
    /// Pause auto when the user changes slides manually.
    #[schemars(title = "Pause on Interaction")]
    pub pause_on_interaction: bool,
    /// Seconds without interaction before auto resumes.
    #[schemars(title = "Resume Delay", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub resume_delay_secs: f32,
    /// Behaviour at the ends of the deck.
    #[schemars(title = "Navigation")]
    pub navigation: Navigation,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_start: false,
            auto_mode: AutoMode::Spin,
            advance_interval_secs: 4.0,
            pause_on_interaction: true,
            resume_delay_secs: 10.0,
            navigation: Navigation::Wrap,
        }
    }
}

impl CarouselOptions {
    /// Advance interval as a duration. Invalid values fall back to 4 s.
    #[must_use]
    pub fn advance_interval(&self) -> Duration {
        secs_or(self.advance_interval_secs, Duration::from_secs(4))
    }

    /// Resume delay as a duration. Invalid values fall back to 10 s.
    #[must_use]
    pub fn resume_delay(&self) -> Duration {
        secs_or(self.resume_delay_secs, Duration::from_secs(10))
    }
}

fn secs_or(secs: f32, fallback: Duration) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(fallback)
}
