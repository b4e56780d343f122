use crate::themes::{NEUTRAL, ThemeParams, normalize_key};

struct Location {
    name: &'static str,
    valence: f64,
    energy: f64,
    genres: &'static [&'static str],
}

struct Weather {
    name: &'static str,
    valence: f64,
    energy: f64,
    genres: &'static [&'static str],
}

struct TimeOfDay {
    name: &'static str,
    valence: f64,
    energy: f64,
}

#[rustfmt::skip]
const LOCATIONS: &[Location] = &[
    Location { name: "tokyo", valence: 0.6, energy: 0.7, genres: &["j-pop", "j-rock", "anime", "electronic"] },
    Location { name: "london", valence: 0.45, energy: 0.6, genres: &["british", "indie", "garage", "alt-rock"] },
    Location { name: "paris", valence: 0.55, energy: 0.45, genres: &["french", "jazz", "chill"] },
    Location { name: "nyc", valence: 0.5, energy: 0.75, genres: &["hip-hop", "jazz", "r-n-b"] },
    Location { name: "new york", valence: 0.5, energy: 0.75, genres: &["hip-hop", "jazz", "r-n-b"] },
    Location { name: "berlin", valence: 0.4, energy: 0.8, genres: &["techno", "minimal-techno", "electronic"] },
    Location { name: "rio", valence: 0.8, energy: 0.75, genres: &["brazil", "samba", "bossanova", "mpb"] },
    Location { name: "seoul", valence: 0.7, energy: 0.75, genres: &["k-pop", "dance", "r-n-b"] },
    Location { name: "nashville", valence: 0.6, energy: 0.55, genres: &["country", "honky-tonk", "bluegrass"] },
];

// Deltas applied on top of the location's base values.
#[rustfmt::skip]
const WEATHER: &[Weather] = &[
    Weather { name: "rain", valence: -0.2, energy: -0.2, genres: &["rainy-day", "chill"] },
    Weather { name: "sunny", valence: 0.2, energy: 0.15, genres: &["summer", "happy"] },
    Weather { name: "snow", valence: -0.05, energy: -0.25, genres: &["acoustic", "ambient"] },
    Weather { name: "cloudy", valence: -0.1, energy: -0.1, genres: &["indie"] },
    Weather { name: "storm", valence: -0.25, energy: 0.2, genres: &["metal", "industrial"] },
];

#[rustfmt::skip]
const TIMES: &[TimeOfDay] = &[
    TimeOfDay { name: "morning", valence: 0.1, energy: 0.05 },
    TimeOfDay { name: "afternoon", valence: 0.05, energy: 0.1 },
    TimeOfDay { name: "evening", valence: 0.0, energy: -0.05 },
    TimeOfDay { name: "night", valence: -0.05, energy: -0.05 },
    TimeOfDay { name: "late night", valence: -0.15, energy: -0.25 },
];

/// Targets for a place, its weather and a time of day.
///
/// Valence and energy start from the location's base values (neutral for an
/// unknown location) and the weather and time deltas are added on top, then
/// clamped. Genres are the location's followed by the weather's, deduplicated.
///
/// # Example
///
/// ```
/// let theme = vibe_teleporter("Tokyo", "Rain", "Night");
/// assert_eq!(theme.genres[0], "j-pop");
/// ```
pub fn vibe_teleporter(location: &str, weather: &str, time_of_day: &str) -> ThemeParams {
    let location_key = normalize_key(location);
    let weather_key = normalize_key(weather);
    let time_key = normalize_key(time_of_day);

    let place = LOCATIONS.iter().find(|l| l.name == location_key);
    let sky = WEATHER.iter().find(|w| w.name == weather_key);
    let time = TIMES.iter().find(|t| t.name == time_key);

    let (mut valence, mut energy) = place.map_or((NEUTRAL, NEUTRAL), |l| (l.valence, l.energy));
    if let Some(w) = sky {
        valence += w.valence;
        energy += w.energy;
    }
    if let Some(t) = time {
        valence += t.valence;
        energy += t.energy;
    }

    let genres = place
        .map(|l| l.genres)
        .unwrap_or_default()
        .iter()
        .chain(sky.map(|w| w.genres).unwrap_or_default());

    ThemeParams::build(valence, energy, genres)
}

pub fn known_locations() -> Vec<&'static str> {
    LOCATIONS.iter().map(|l| l.name).collect()
}

pub fn known_weather() -> Vec<&'static str> {
    WEATHER.iter().map(|w| w.name).collect()
}

pub fn known_times() -> Vec<&'static str> {
    TIMES.iter().map(|t| t.name).collect()
}
