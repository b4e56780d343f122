//! The set of genre tokens the recommendation endpoint accepts as seeds.
//!
//! The catalog answers unknown genre seeds with an error, so every genre list
//! produced inside the crate is passed through [`sanitize`] before it is used.
//! The list is fixed at compile time.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

#[rustfmt::skip]
const GENRE_SEEDS: &[&str] = &[
    "acoustic", "afrobeat", "alt-rock", "alternative", "ambient", "anime",
    "black-metal", "bluegrass", "blues", "bossanova", "brazil", "breakbeat",
    "british", "cantopop", "chicago-house", "children", "chill", "classical",
    "club", "comedy", "country", "dance", "dancehall", "death-metal",
    "deep-house", "detroit-techno", "disco", "disney", "drum-and-bass", "dub",
    "dubstep", "edm", "electro", "electronic", "emo", "folk", "forro", "french",
    "funk", "garage", "german", "gospel", "goth", "grindcore", "groove",
    "grunge", "guitar", "happy", "hard-rock", "hardcore", "hardstyle",
    "heavy-metal", "hip-hop", "holidays", "honky-tonk", "house", "idm",
    "indian", "indie", "indie-pop", "industrial", "iranian", "j-dance", "j-idol",
    "j-pop", "j-rock", "jazz", "k-pop", "kids", "latin", "latino", "malay",
    "mandopop", "metal", "metal-misc", "metalcore", "minimal-techno", "movies",
    "mpb", "new-age", "new-release", "opera", "pagode", "party", "philippines-opm",
    "piano", "pop", "pop-film", "post-dubstep", "power-pop", "progressive-house",
    "psych-rock", "punk", "punk-rock", "r-n-b", "rainy-day", "reggae", "reggaeton",
    "road-trip", "rock", "rock-n-roll", "rockabilly", "romance", "sad", "salsa",
    "samba", "sertanejo", "show-tunes", "singer-songwriter", "ska", "sleep",
    "songwriter", "soul", "soundtracks", "spanish", "study", "summer", "swedish",
    "synth-pop", "tango", "techno", "trance", "trip-hop", "turkish", "work-out",
    "world-music",
];

static VOCABULARY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GENRE_SEEDS.iter().copied().collect());

/// Returns `true` when `genre` is a seed the catalog accepts.
pub fn is_valid(genre: &str) -> bool {
    VOCABULARY.contains(genre)
}

/// All genre seeds in alphabetical order.
pub fn all() -> BTreeSet<&'static str> {
    VOCABULARY.iter().copied().collect()
}

pub fn len() -> usize {
    VOCABULARY.len()
}

/// Drops unknown tokens and duplicates, keeping the first occurrence order.
pub fn sanitize<I, S>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    genres
        .into_iter()
        .filter_map(|g| {
            let g = g.as_ref().trim().to_lowercase();
            (is_valid(&g) && seen.insert(g.clone())).then_some(g)
        })
        .collect()
}
