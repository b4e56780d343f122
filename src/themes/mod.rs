//! # Theme Parameter Mapper
//!
//! Turns human-facing choices (a place and its weather, an aesthetic, the
//! inverse of the user's taste) into audio targets and genre seeds for the
//! recommendation engine.
//!
//! Every function here is pure: no catalog calls, no randomness. The same
//! input always yields the same [`ThemeParams`]. Valence and energy are
//! clamped to `[0, 1]` and genres are restricted to the seed vocabulary in
//! [`crate::genres`], capped at [`SEED_LIMIT`] entries.

mod aesthetic;
mod alternate;
mod vibe;

pub use aesthetic::{aesthetic_generator, known_aesthetics};
pub use alternate::{alternate_you, taste_profile};
pub use vibe::{known_locations, known_times, known_weather, vibe_teleporter};

use crate::{
    genres,
    recommend::{RecommendationRequest, SEED_LIMIT, SeedSet},
    types::TargetParams,
};

/// Neutral target used when nothing is known about a theme.
pub const NEUTRAL: f64 = 0.5;

/// Audio targets and genre seeds derived from a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeParams {
    pub valence: f64,
    pub energy: f64,
    pub genres: Vec<String>,
}

impl ThemeParams {
    pub(crate) fn build<I, S>(valence: f64, energy: f64, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut genres = genres::sanitize(genres);
        genres.truncate(SEED_LIMIT);

        ThemeParams {
            valence: clamp_unit(valence),
            energy: clamp_unit(energy),
            genres,
        }
    }

    pub fn targets(&self) -> TargetParams {
        TargetParams::new(Some(self.valence), Some(self.energy))
    }

    /// Splits into the target parameters and the genre seeds.
    pub fn into_parts(self) -> (TargetParams, Vec<String>) {
        let targets = self.targets();
        (targets, self.genres)
    }

    pub fn into_request(self, limit: u32) -> RecommendationRequest {
        let (targets, genres) = self.into_parts();
        RecommendationRequest::new(SeedSet::new().with_genres(genres))
            .limit(limit)
            .targets(targets)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        NEUTRAL
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Lookup key for table entries: lower case, `-`/`_` read as spaces.
pub(crate) fn normalize_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
