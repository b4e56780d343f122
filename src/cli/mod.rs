//! # CLI Module
//!
//! Command-line front-end of SonicDiscovery. Every command talks to the
//! catalog with a bearer token given by `--token` or `SPOTIFY_ACCESS_TOKEN`
//! and prints its result as a table.
//!
//! ## Commands
//!
//! - [`serve`] - runs the HTTP API
//! - [`recommend`] - recommendations from explicit seeds and targets
//! - [`decade`] - tracks from a decade
//! - [`vibe`], [`aesthetic`], [`alternate`] - themed generators
//! - [`top`] - the user's top genres, artists or tracks
//! - [`info`] - genre seeds and the keys the theme generators understand
//!
//! ## Output
//!
//! A spinner runs while catalog calls are in flight. An empty result prints
//! a warning instead of an empty table.

mod features;
mod info;
mod serve;
mod top;

pub use features::{RecommendArgs, aesthetic, alternate, decade, recommend, vibe};
pub use info::info;
pub use serve::serve;
pub use top::{TopKind, top};

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, error, spotify::SpotifyClient, types::Track, utils, warning};

fn catalog_client(token: Option<String>) -> SpotifyClient {
    let token = match token.map_or_else(config::spotify_access_token, Ok) {
        Ok(t) => t,
        Err(e) => error!("No access token available. {}", e),
    };
    SpotifyClient::new(token)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        warning!("No tracks found.");
        return;
    }

    let table = Table::new(utils::track_table_rows(tracks));
    println!("{}", table);
}
