//! Angle helpers shared by the rotation controller and the slide deck.

use std::f32::consts::{PI, TAU};

/// Reduce an angular difference to the shortest signed arc in `(-π, π]`.
///
/// Works for any magnitude, so a target compared against an angle that has
/// been spinning unbounded for minutes still resolves to the short way round.
#[inline]
#[must_use]
pub fn shortest_arc(diff: f32) -> f32 {
    let r = (PI - diff).rem_euclid(TAU);
    // rem_euclid may round up to TAU for inputs just below a multiple.
    if r >= TAU {
        PI
    } else {
        PI - r
    }
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
#[must_use]
pub fn wrap_positive(angle: f32) -> f32 {
    let r = angle.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Evenly spaced angles around a full turn: `i / count * 2π`.
#[must_use]
pub fn even_spacing(count: usize) -> Vec<f32> {
    (0..count).map(|i| i as f32 / count as f32 * TAU).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn shortest_arc_leaves_small_differences_alone() {
        assert_eq!(shortest_arc(0.0), 0.0);
        assert!((shortest_arc(1.0) - 1.0).abs() < EPS);
        assert!((shortest_arc(-1.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn shortest_arc_takes_the_short_way_across_zero() {
        // 350° to 10° should be +20°, not -340°.
        let diff = 10f32.to_radians() - 350f32.to_radians();
        assert!((shortest_arc(diff) - 20f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn shortest_arc_keeps_pi_positive() {
        assert!((shortest_arc(PI) - PI).abs() < EPS);
        assert!((shortest_arc(-PI) - PI).abs() < EPS);
    }

    #[test]
    fn shortest_arc_handles_many_turns() {
        let diff = 7.0 * TAU + 0.25;
        assert!((shortest_arc(diff) - 0.25).abs() < 1e-4);
        let diff = -5.0 * TAU - 0.25;
        assert!((shortest_arc(diff) + 0.25).abs() < 1e-4);
    }

    #[test]
    fn wrap_positive_range() {
        assert_eq!(wrap_positive(0.0), 0.0);
        assert!((wrap_positive(TAU + 0.5) - 0.5).abs() < EPS);
        assert!((wrap_positive(-0.5) - (TAU - 0.5)).abs() < EPS);
        assert!(wrap_positive(-1e-9) < TAU);
    }

    #[test]
    fn even_spacing_five_slides() {
        let angles = even_spacing(5);
        assert_eq!(angles.len(), 5);
        assert_eq!(angles[0], 0.0);
        assert!((angles[4] - 8.0 * PI / 5.0).abs() < EPS);
    }
}
