use std::cmp::Ordering;

use crate::{
    genres,
    recommend::SEED_LIMIT,
    themes::{NEUTRAL, ThemeParams},
};

// (genre seed, valence, energy)
#[rustfmt::skip]
const GENRE_PROFILES: &[(&str, f64, f64)] = &[
    ("acoustic", 0.5, 0.25), ("ambient", 0.3, 0.1), ("blues", 0.4, 0.4),
    ("bossanova", 0.6, 0.3), ("chill", 0.55, 0.3), ("classical", 0.35, 0.2),
    ("country", 0.6, 0.55), ("dance", 0.75, 0.8), ("disco", 0.8, 0.75),
    ("edm", 0.6, 0.9), ("emo", 0.25, 0.8), ("folk", 0.5, 0.3),
    ("funk", 0.8, 0.7), ("gospel", 0.7, 0.55), ("goth", 0.2, 0.6),
    ("happy", 0.9, 0.7), ("heavy-metal", 0.25, 0.95), ("hip-hop", 0.55, 0.7),
    ("house", 0.65, 0.8), ("indie", 0.5, 0.55), ("jazz", 0.55, 0.35),
    ("k-pop", 0.7, 0.75), ("latin", 0.75, 0.75), ("metal", 0.25, 0.95),
    ("new-age", 0.4, 0.15), ("opera", 0.35, 0.4), ("piano", 0.35, 0.15),
    ("pop", 0.7, 0.65), ("punk", 0.45, 0.9), ("r-n-b", 0.55, 0.5),
    ("reggae", 0.75, 0.5), ("reggaeton", 0.75, 0.8), ("rock", 0.5, 0.75),
    ("sad", 0.15, 0.3), ("singer-songwriter", 0.45, 0.3), ("ska", 0.8, 0.85),
    ("sleep", 0.2, 0.05), ("soul", 0.6, 0.45), ("techno", 0.4, 0.85),
    ("trip-hop", 0.35, 0.4),
];

/// Estimated `(valence, energy)` of a listener from their top genres.
///
/// Each listener genre is matched against the profile table by substring on
/// its hyphenated form, so `"indie rock"` counts towards both `indie` and
/// `rock`. Matched profiles are averaged; no match gives a neutral profile.
pub fn taste_profile<S: AsRef<str>>(top_genres: &[S]) -> (f64, f64) {
    let mut matched = 0usize;
    let (mut valence, mut energy) = (0.0, 0.0);

    for genre in top_genres {
        let genre = hyphenate(genre.as_ref());
        for (_, v, e) in GENRE_PROFILES.iter().filter(|(name, ..)| genre.contains(name)) {
            valence += v;
            energy += e;
            matched += 1;
        }
    }

    if matched == 0 {
        return (NEUTRAL, NEUTRAL);
    }
    (valence / matched as f64, energy / matched as f64)
}

/// The listener's "opposite" taste.
///
/// Targets are the inverse of [`taste_profile`]. Genres are the profiled
/// seeds closest to that inverse, skipping any seed that equals, contains or
/// is contained in one of the listener's genres. The result never shares a
/// genre with the input.
pub fn alternate_you<S: AsRef<str>>(top_genres: &[S]) -> ThemeParams {
    let (valence, energy) = taste_profile(top_genres);
    let (target_valence, target_energy) = (1.0 - valence, 1.0 - energy);

    let listener: Vec<String> = top_genres
        .iter()
        .map(|g| hyphenate(g.as_ref()))
        .filter(|g| !g.is_empty())
        .collect();
    let is_foreign = |candidate: &str| {
        !listener
            .iter()
            .any(|own| own == candidate || own.contains(candidate) || candidate.contains(own.as_str()))
    };

    let mut candidates: Vec<(&str, f64)> = GENRE_PROFILES
        .iter()
        .filter(|(name, ..)| genres::is_valid(name) && is_foreign(*name))
        .map(|(name, v, e)| {
            let distance = (v - target_valence).powi(2) + (e - target_energy).powi(2);
            (*name, distance)
        })
        .collect();
    candidates.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut picks: Vec<&str> = candidates
        .into_iter()
        .take(SEED_LIMIT)
        .map(|(name, _)| name)
        .collect();

    // every profiled genre is excluded: take whatever the vocabulary still offers
    if picks.is_empty() {
        picks = genres::all()
            .into_iter()
            .filter(|g| is_foreign(*g))
            .take(SEED_LIMIT)
            .collect();
    }

    ThemeParams::build(target_valence, target_energy, picks)
}

fn hyphenate(genre: &str) -> String {
    genre
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
