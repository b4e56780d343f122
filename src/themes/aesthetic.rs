use crate::themes::{NEUTRAL, ThemeParams, normalize_key};

const AESTHETICS: &[(&str, f64, f64, &[&str])] = &[
    ("vaporwave", 0.55, 0.4, &["synth-pop", "electronic", "chill", "disco"]),
    ("dark academia", 0.25, 0.3, &["classical", "piano", "opera", "ambient"]),
    ("cyberpunk", 0.3, 0.85, &["industrial", "electro", "techno", "synth-pop"]),
    ("cottagecore", 0.7, 0.3, &["folk", "acoustic", "singer-songwriter", "indie"]),
    ("neo noir", 0.2, 0.4, &["jazz", "trip-hop", "blues", "soul"]),
    ("lo fi", 0.5, 0.25, &["chill", "study", "trip-hop"]),
    ("y2k", 0.8, 0.8, &["pop", "power-pop", "dance", "r-n-b"]),
];

const DEFAULT_GENRES: &[&str] = &["pop", "indie", "chill"];

/// Fixed targets for a named aesthetic.
///
/// Unknown styles get a neutral profile with mainstream genres.
pub fn aesthetic_generator(style: &str) -> ThemeParams {
    let key = normalize_key(style);
    match AESTHETICS.iter().find(|(name, ..)| *name == key) {
        Some((_, valence, energy, genres)) => ThemeParams::build(*valence, *energy, *genres),
        None => ThemeParams::build(NEUTRAL, NEUTRAL, DEFAULT_GENRES),
    }
}

pub fn known_aesthetics() -> Vec<&'static str> {
    AESTHETICS.iter().map(|(name, ..)| *name).collect()
}
