use crate::{genres, info, themes};

/// Prints the genre seed vocabulary and the keys the theme generators know.
///
/// # Example Usage
///
/// ```bash
/// sonicdiscovery info --genres
/// sonicdiscovery info --themes
/// ```
pub fn info(show_genres: bool, show_themes: bool) {
    let show_all = !show_genres && !show_themes;

    if show_genres || show_all {
        info!("{} genre seeds:", genres::len());
        let all: Vec<&str> = genres::all().into_iter().collect();
        for chunk in all.chunks(8) {
            println!("    {}", chunk.join(", "));
        }
    }

    if show_themes || show_all {
        info!("Locations: {}", themes::known_locations().join(", "));
        info!("Weather: {}", themes::known_weather().join(", "));
        info!("Times of day: {}", themes::known_times().join(", "));
        info!("Aesthetics: {}", themes::known_aesthetics().join(", "));
    }
}
