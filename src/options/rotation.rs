use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::carousel::{pentagon_angles, resolve_angles, AngleSource};
use crate::error::PlinthError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Trophy rotation parameters.
pub struct RotationOptions {
    /// How slide target angles are derived.
    #[schemars(title = "Angle Source")]
    pub angle_source: AngleSource,
    /// Explicit per-slide angles (radians) used by the fixed table source.
    #[schemars(skip)]
    pub fixed_angles: Vec<f32>,
    /// Fraction of the remaining arc covered per frame while targeting.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing_factor: f32,
    /// Spin step in radians per frame while auto-rotating.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub auto_rotate_speed: f32,
    /// Keep the spinning angle within one turn.
    #[schemars(title = "Wrap Spin Angle")]
    pub wrap_auto_rotation: bool,
    /// Scale motion by elapsed frame time instead of frame count.
    #[schemars(title = "Frame-Rate Independent")]
    pub time_scaled: bool,
    /// Frame rate the smoothing factor and spin speed are tuned for.
    #[schemars(skip)]
    pub reference_fps: f32,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            angle_source: AngleSource::EvenSpacing,
            fixed_angles: pentagon_angles(),
            smoothing_factor: 0.1,
            auto_rotate_speed: 0.01,
            wrap_auto_rotation: true,
            time_scaled: false,
            reference_fps: 60.0,
        }
    }
}

impl RotationOptions {
    /// Target angles for a deck of `count` slides under these options.
    pub fn slide_angles(&self, count: usize) -> Result<Vec<f32>, PlinthError> {
        resolve_angles(self.angle_source, &self.fixed_angles, count)
    }
}
