//! Slide-driven yaw controller.
//!
//! Owns the displayed object's current yaw and eases it toward the target
//! angle of the selected slide, or spins it continuously while auto-rotate is
//! on. The host calls [`RotationController::tick`] once per rendered frame and
//! applies the returned angle to its scene object.

use glam::Quat;

use super::angle::{shortest_arc, wrap_positive};
use crate::error::PlinthError;
use crate::options::RotationOptions;

/// Smallest smoothing factor accepted; anything lower would never settle.
const MIN_SMOOTHING: f32 = 1e-3;

/// Which motion the next tick applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Continuous spin at the configured speed, ignoring the target.
    Auto,
    /// Exponential ease toward the selected slide's angle.
    Targeting,
}

/// Angles and mode of a rotating object.
///
/// `current_angle` only changes inside [`RotationController::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    current_angle: f32,
    target_angle: f32,
    auto_rotating: bool,
    auto_rotate_speed: f32,
}

impl RotationState {
    /// Displayed yaw in radians.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Yaw the object converges toward while targeting.
    #[must_use]
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    /// Whether the object is spinning continuously.
    #[must_use]
    pub fn auto_rotating(&self) -> bool {
        self.auto_rotating
    }

    /// Spin step in radians per tick.
    #[must_use]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }
}

/// Converts discrete slide selections into a smoothly animated yaw.
#[derive(Debug, Clone)]
pub struct RotationController {
    state: RotationState,
    /// Target angle per slide, indexed by slide id.
    targets: Vec<f32>,
    active: usize,
    smoothing_factor: f32,
    wrap_auto_rotation: bool,
    /// Frames per second the smoothing factor is tuned for. `None` means
    /// one tick is one step regardless of elapsed time.
    reference_fps: Option<f32>,
}

impl RotationController {
    /// Create a controller for the given per-slide target angles.
    ///
    /// Starts at angle 0 targeting slide 0.
    pub fn new(
        targets: Vec<f32>,
        options: &RotationOptions,
        auto_rotating: bool,
    ) -> Result<Self, PlinthError> {
        let Some(&first) = targets.first() else {
            return Err(PlinthError::EmptyDeck);
        };

        let smoothing_factor = options.smoothing_factor.clamp(MIN_SMOOTHING, 1.0);
        if smoothing_factor != options.smoothing_factor {
            log::warn!(
                "smoothing factor {} out of range, using {smoothing_factor}",
                options.smoothing_factor
            );
        }

        Ok(Self {
            state: RotationState {
                current_angle: 0.0,
                target_angle: first,
                auto_rotating,
                auto_rotate_speed: options.auto_rotate_speed,
            },
            targets,
            active: 0,
            smoothing_factor,
            wrap_auto_rotation: options.wrap_auto_rotation,
            reference_fps: options
                .time_scaled
                .then_some(options.reference_fps)
                .filter(|fps| *fps > 0.0),
        })
    }

    /// Current angles and mode.
    #[must_use]
    pub fn state(&self) -> &RotationState {
        &self.state
    }

    /// Displayed yaw in radians.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.state.current_angle
    }

    /// Target yaw of the selected slide.
    #[must_use]
    pub fn target_angle(&self) -> f32 {
        self.state.target_angle
    }

    /// Index of the selected slide, always in `[0, slide_count)`.
    #[must_use]
    pub fn active_slide(&self) -> usize {
        self.active
    }

    /// Number of slides the controller targets.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.targets.len()
    }

    /// Motion applied on the next tick.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        if self.state.auto_rotating {
            RotationMode::Auto
        } else {
            RotationMode::Targeting
        }
    }

    /// Whether continuous spin is active.
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.state.auto_rotating
    }

    /// Select a slide by index. Out-of-range indices wrap modulo the slide
    /// count in both directions. The displayed angle is untouched until the
    /// next tick.
    pub fn select_slide(&mut self, index: isize) {
        let count = self.targets.len() as isize;
        let wrapped = index.rem_euclid(count) as usize;
        self.active = wrapped;
        self.state.target_angle = self.targets[wrapped];
        log::debug!(
            "slide {wrapped} selected, target {:.4} rad",
            self.state.target_angle
        );
    }

    /// Select the following slide, wrapping from the last to the first.
    pub fn next_slide(&mut self) {
        self.select_slide(self.active as isize + 1);
    }

    /// Select the preceding slide, wrapping from the first to the last.
    pub fn previous_slide(&mut self) {
        self.select_slide(self.active as isize - 1);
    }

    /// Enable or disable continuous spin. Takes effect on the next tick.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.state.auto_rotating = enabled;
    }

    /// Flip continuous spin, returning the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.state.auto_rotating = !self.state.auto_rotating;
        self.state.auto_rotating
    }

    /// Change the spin step (radians per tick).
    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.state.auto_rotate_speed = speed;
    }

    /// Advance one animation frame and return the updated yaw.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame. It only
    /// matters when time scaling is enabled; otherwise every tick is one
    /// fixed step.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let frames = self.reference_fps.map(|fps| (dt * fps).max(0.0));

        if self.state.auto_rotating {
            let step = self.state.auto_rotate_speed * frames.unwrap_or(1.0);
            self.state.current_angle += step;
            if self.wrap_auto_rotation {
                self.state.current_angle = wrap_positive(self.state.current_angle);
            }
        } else {
            let factor = match frames {
                Some(n) => 1.0 - (1.0 - self.smoothing_factor).powf(n),
                None => self.smoothing_factor,
            };
            self.state.current_angle += self.remaining() * factor;
        }

        self.state.current_angle
    }

    /// Signed shortest arc from the current angle to the target.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        shortest_arc(self.state.target_angle - self.state.current_angle)
    }

    /// Whether targeting motion has come within `epsilon` radians of the
    /// target. Always false while spinning.
    #[must_use]
    pub fn settled(&self, epsilon: f32) -> bool {
        !self.state.auto_rotating && self.remaining().abs() <= epsilon
    }

    /// Current yaw as a rotation about +Y.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.state.current_angle)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use super::*;
    use crate::rotation::angle::even_spacing;

    fn five_slides() -> RotationController {
        RotationController::new(even_spacing(5), &RotationOptions::default(), false)
            .unwrap()
    }

    #[test]
    fn starts_at_zero_targeting_first_slide() {
        let c = five_slides();
        assert_eq!(c.current_angle(), 0.0);
        assert_eq!(c.target_angle(), 0.0);
        assert_eq!(c.active_slide(), 0);
        assert_eq!(c.slide_count(), 5);
        assert_eq!(c.mode(), RotationMode::Targeting);
    }

    #[test]
    fn empty_target_list_is_rejected() {
        let result = RotationController::new(Vec::new(), &RotationOptions::default(), false);
        assert!(matches!(result, Err(PlinthError::EmptyDeck)));
    }

    #[test]
    fn select_slide_sets_target_without_moving() {
        let mut c = five_slides();
        c.select_slide(2);
        assert!((c.target_angle() - 4.0 * PI / 5.0).abs() < 1e-6);
        assert_eq!(c.current_angle(), 0.0);
    }

    #[test]
    fn slide_index_wraps_both_directions() {
        let mut c = five_slides();
        c.previous_slide();
        assert_eq!(c.active_slide(), 4);
        c.next_slide();
        assert_eq!(c.active_slide(), 0);

        c.select_slide(7);
        assert_eq!(c.active_slide(), 2);
        c.select_slide(-1);
        assert_eq!(c.active_slide(), 4);
    }

    #[test]
    fn single_slide_wraps_onto_itself_and_settles() {
        let mut c =
            RotationController::new(vec![1.0], &RotationOptions::default(), false).unwrap();
        c.next_slide();
        assert_eq!(c.active_slide(), 0);
        c.previous_slide();
        assert_eq!(c.active_slide(), 0);
        c.select_slide(-7);
        assert_eq!(c.active_slide(), 0);
        assert_eq!(c.target_angle(), 1.0);

        for _ in 0..200 {
            let _ = c.tick(1.0 / 60.0);
        }
        assert!((c.current_angle() - 1.0).abs() < 1e-4);
        assert!(c.settled(1e-4));
    }

    #[test]
    fn converges_along_shortest_arc_with_shrinking_distance() {
        for index in 0..5 {
            let mut c = five_slides();
            c.select_slide(index);
            let expected_sign = c.remaining().signum();
            let mut last = c.remaining().abs();
            let mut ticks = 0;
            while last > 1e-3 {
                let before = c.current_angle();
                let _ = c.tick(1.0 / 60.0);
                let moved = c.current_angle() - before;
                assert_eq!(moved.signum(), expected_sign);
                let now = c.remaining().abs();
                assert!(now < last, "distance grew: {now} >= {last}");
                last = now;
                ticks += 1;
                assert!(ticks < 1000, "did not converge");
            }
        }
    }

    #[test]
    fn short_way_across_full_turn_moves_negative() {
        let targets = vec![0.0, TAU - 0.1];
        let mut c =
            RotationController::new(targets, &RotationOptions::default(), false).unwrap();
        // Park the object at 0.1 before targeting the far slide.
        c.select_slide(0);
        c.state.current_angle = 0.1;
        c.select_slide(1);
        let angle = c.tick(1.0 / 60.0);
        assert!(angle < 0.1, "moved the long way: {angle}");
    }

    #[test]
    fn five_slide_scenario_rotates_negative_toward_last() {
        let mut c = five_slides();
        c.select_slide(4);
        assert!((c.target_angle() - 5.0265).abs() < 1e-3);
        assert!((c.remaining() + 2.0 * PI / 5.0).abs() < 1e-5);

        let mut previous = c.current_angle();
        for _ in 0..200 {
            let angle = c.tick(1.0 / 60.0);
            assert!(angle <= previous);
            previous = angle;
        }
        assert!((c.current_angle() + 2.0 * PI / 5.0).abs() < 1e-3);
        assert!(c.settled(1e-3));
    }

    #[test]
    fn auto_rotate_adds_speed_per_tick_regardless_of_target() {
        let mut c = five_slides();
        c.set_auto_rotate(true);
        c.select_slide(3);
        for _ in 0..50 {
            let _ = c.tick(1.0 / 60.0);
        }
        let expected = 50.0 * c.state().auto_rotate_speed();
        assert!((c.current_angle() - expected).abs() < 1e-5);
        assert!(!c.settled(1.0));
    }

    #[test]
    fn unbounded_spin_when_wrapping_disabled() {
        let options = RotationOptions {
            wrap_auto_rotation: false,
            auto_rotate_speed: 1.0,
            ..RotationOptions::default()
        };
        let mut c = RotationController::new(even_spacing(3), &options, true).unwrap();
        for _ in 0..10 {
            let _ = c.tick(0.0);
        }
        assert!((c.current_angle() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn wrapped_spin_stays_within_one_turn() {
        let options = RotationOptions {
            auto_rotate_speed: 1.0,
            ..RotationOptions::default()
        };
        let mut c = RotationController::new(even_spacing(3), &options, true).unwrap();
        for _ in 0..10 {
            let angle = c.tick(0.0);
            assert!((0.0..TAU).contains(&angle));
        }
        assert!((c.current_angle() - (10.0 - TAU)).abs() < 1e-4);
    }

    #[test]
    fn mode_switch_preserves_angle() {
        let mut c = five_slides();
        c.set_auto_rotate(true);
        for _ in 0..30 {
            let _ = c.tick(1.0 / 60.0);
        }
        let spun = c.current_angle();
        assert!(!c.toggle_auto_rotate());
        assert_eq!(c.current_angle(), spun);
        assert_eq!(c.mode(), RotationMode::Targeting);

        // First targeting tick starts from the spun angle toward slide 0.
        let expected = spun + shortest_arc(0.0 - spun) * c.smoothing_factor;
        let angle = c.tick(1.0 / 60.0);
        assert!((angle - expected).abs() < 1e-6);
    }

    #[test]
    fn time_scaling_matches_fixed_step_at_reference_rate() {
        let scaled = RotationOptions {
            time_scaled: true,
            ..RotationOptions::default()
        };
        let mut fixed = five_slides();
        let mut timed =
            RotationController::new(even_spacing(5), &scaled, false).unwrap();
        fixed.select_slide(1);
        timed.select_slide(1);
        for _ in 0..20 {
            let a = fixed.tick(1.0);
            let b = timed.tick(1.0 / 60.0);
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn time_scaling_covers_more_ground_on_slow_frames() {
        let scaled = RotationOptions {
            time_scaled: true,
            ..RotationOptions::default()
        };
        let mut fast = RotationController::new(even_spacing(5), &scaled, false).unwrap();
        let mut slow = fast.clone();
        fast.select_slide(1);
        slow.select_slide(1);
        for _ in 0..4 {
            let _ = fast.tick(1.0 / 60.0);
        }
        let _ = slow.tick(4.0 / 60.0);
        assert!((fast.current_angle() - slow.current_angle()).abs() < 1e-5);
    }

    #[test]
    fn out_of_range_smoothing_is_clamped() {
        let options = RotationOptions {
            smoothing_factor: 4.0,
            ..RotationOptions::default()
        };
        let mut c = RotationController::new(even_spacing(4), &options, false).unwrap();
        c.select_slide(1);
        let angle = c.tick(1.0 / 60.0);
        assert!((angle - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn orientation_is_yaw_about_y() {
        let mut c = five_slides();
        c.state.current_angle = PI / 2.0;
        let forward = c.orientation() * glam::Vec3::Z;
        assert!((forward - glam::Vec3::X).length() < 1e-5);
    }
}
