//! Award slides and their target angles.
//!
//! A [`SlideDeck`] is the ordered, fixed list of awards shown next to the
//! trophy. Each slide carries the yaw the trophy turns to when it is
//! selected; the angles come from an [`AngleSource`] policy.

mod slide;

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use slide::{Slide, SlidePosition, SlideSpec};

use crate::error::PlinthError;
use crate::rotation::even_spacing;

/// How each slide's target angle is derived.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AngleSource {
    /// `index / count * 2π`: slides spread evenly around a full turn.
    #[default]
    EvenSpacing,
    /// An explicit table with one angle per slide.
    FixedTable,
}

/// What happens when navigating past either end of the deck.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Previous from the first slide goes to the last, and vice versa.
    #[default]
    Wrap,
    /// Navigation stops at the ends; the host disables the buttons.
    Clamp,
}

/// The pentagon table: five views 72° apart.
#[must_use]
pub fn pentagon_angles() -> Vec<f32> {
    vec![0.0, PI * 0.4, PI * 0.8, PI * 1.2, PI * 1.6]
}

/// Resolve per-slide target angles for a deck of `count` slides.
pub fn resolve_angles(
    source: AngleSource,
    table: &[f32],
    count: usize,
) -> Result<Vec<f32>, PlinthError> {
    if count == 0 {
        return Err(PlinthError::EmptyDeck);
    }
    match source {
        AngleSource::EvenSpacing => Ok(even_spacing(count)),
        AngleSource::FixedTable if table.len() == count => Ok(table.to_vec()),
        AngleSource::FixedTable => Err(PlinthError::AngleTableMismatch {
            slides: count,
            angles: table.len(),
        }),
    }
}

/// Ordered, non-empty list of slides with a navigation policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    navigation: Navigation,
}

impl SlideDeck {
    /// Build a deck from slide content and one target angle per slide.
    pub fn new(
        specs: Vec<SlideSpec>,
        angles: &[f32],
        navigation: Navigation,
    ) -> Result<Self, PlinthError> {
        if specs.is_empty() {
            return Err(PlinthError::EmptyDeck);
        }
        if specs.len() != angles.len() {
            return Err(PlinthError::AngleTableMismatch {
                slides: specs.len(),
                angles: angles.len(),
            });
        }

        let slides = specs
            .into_iter()
            .zip(angles)
            .enumerate()
            .map(|(id, (spec, &angle))| Slide {
                id,
                title: spec.title,
                description: spec.description,
                angle,
            })
            .collect();

        Ok(Self { slides, navigation })
    }

    /// Build a deck from content, resolving angles with the given policy.
    pub fn with_angle_source(
        specs: Vec<SlideSpec>,
        source: AngleSource,
        table: &[f32],
        navigation: Navigation,
    ) -> Result<Self, PlinthError> {
        let angles = resolve_angles(source, table, specs.len())?;
        Self::new(specs, &angles, navigation)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All slides in order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Target angles in slide order.
    #[must_use]
    pub fn angles(&self) -> Vec<f32> {
        self.slides.iter().map(|s| s.angle).collect()
    }

    /// Navigation policy at the ends of the deck.
    #[must_use]
    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    /// Wrap an absolute slide index into `[0, len)`.
    #[must_use]
    pub fn wrap_index(&self, index: usize) -> usize {
        index % self.slides.len()
    }

    /// Wrap any signed index into `[0, len)`.
    #[must_use]
    pub fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.slides.len() as isize) as usize
    }

    /// The slide `delta` steps away from `from`, honoring the navigation
    /// policy.
    #[must_use]
    pub fn step(&self, from: usize, delta: isize) -> usize {
        let target = from as isize + delta;
        match self.navigation {
            Navigation::Wrap => self.wrap(target),
            Navigation::Clamp => target.clamp(0, self.slides.len() as isize - 1) as usize,
        }
    }

    /// Whether a "previous" control should be enabled at `index`.
    #[must_use]
    pub fn can_go_previous(&self, index: usize) -> bool {
        self.navigation == Navigation::Wrap || index > 0
    }

    /// Whether a "next" control should be enabled at `index`.
    #[must_use]
    pub fn can_go_next(&self, index: usize) -> bool {
        self.navigation == Navigation::Wrap || index + 1 < self.slides.len()
    }

    /// Position of `index` for display ("Slide 3 of 5").
    #[must_use]
    pub fn position(&self, index: usize) -> SlidePosition {
        SlidePosition {
            index,
            total: self.slides.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(n: usize) -> Vec<SlideSpec> {
        (0..n)
            .map(|i| SlideSpec::new(format!("Award {i}"), "desc"))
            .collect()
    }

    #[test]
    fn even_spacing_deck_assigns_ids_and_angles() {
        let deck = SlideDeck::with_angle_source(
            specs(4),
            AngleSource::EvenSpacing,
            &[],
            Navigation::Wrap,
        )
        .unwrap();
        assert_eq!(deck.len(), 4);
        let slide = deck.get(2).unwrap();
        assert_eq!(slide.id, 2);
        assert_eq!(slide.title, "Award 2");
        assert!((slide.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn fixed_table_must_match_slide_count() {
        let err = SlideDeck::with_angle_source(
            specs(3),
            AngleSource::FixedTable,
            &pentagon_angles(),
            Navigation::Wrap,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlinthError::AngleTableMismatch {
                slides: 3,
                angles: 5
            }
        ));

        let deck = SlideDeck::with_angle_source(
            specs(5),
            AngleSource::FixedTable,
            &pentagon_angles(),
            Navigation::Wrap,
        )
        .unwrap();
        assert_eq!(deck.angles(), pentagon_angles());
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = SlideDeck::new(Vec::new(), &[], Navigation::Wrap).unwrap_err();
        assert!(matches!(err, PlinthError::EmptyDeck));
    }

    #[test]
    fn wrap_navigation_loops_around() {
        let deck =
            SlideDeck::with_angle_source(specs(5), AngleSource::EvenSpacing, &[], Navigation::Wrap)
                .unwrap();
        assert_eq!(deck.step(4, 1), 0);
        assert_eq!(deck.step(0, -1), 4);
        assert_eq!(deck.wrap_index(12), 2);
        assert_eq!(deck.wrap_index(usize::MAX), usize::MAX % 5);
        assert!(deck.can_go_previous(0));
        assert!(deck.can_go_next(4));
    }

    #[test]
    fn clamp_navigation_stops_at_ends() {
        let deck =
            SlideDeck::with_angle_source(specs(5), AngleSource::EvenSpacing, &[], Navigation::Clamp)
                .unwrap();
        assert_eq!(deck.step(4, 1), 4);
        assert_eq!(deck.step(0, -1), 0);
        assert_eq!(deck.step(2, 1), 3);
        assert!(!deck.can_go_previous(0));
        assert!(!deck.can_go_next(4));
        assert!(deck.can_go_next(3));
    }

    #[test]
    fn position_display() {
        let deck =
            SlideDeck::with_angle_source(specs(5), AngleSource::EvenSpacing, &[], Navigation::Wrap)
                .unwrap();
        assert_eq!(deck.position(2).to_string(), "Slide 3 of 5");
    }
}
