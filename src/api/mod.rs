//! # API Module
//!
//! HTTP endpoints of the SonicDiscovery server, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Session
//!
//! - [`health`] - liveness and version
//! - [`logout`] - clears the token cookie
//!
//! ### Dashboard
//!
//! - [`me`] - the user's profile, passed through from the catalog
//! - [`dashboard_stats`] - top genres, artists and tracks, new releases and
//!   recently liked tracks and listening statistics in one payload
//! - [`listening_stats`] - counts and genre spread of the top artists and tracks
//!
//! ### Features
//!
//! - [`discover`] - recommendations seeded by liked tracks and top artists
//! - [`mood`] - same seeds biased towards a valence/energy target
//! - [`time_travel`] - tracks from a decade
//! - [`vibe`], [`aesthetic`], [`alternate`] - themed generators
//!
//! ## Authentication
//!
//! Every endpoint except `/health` and `/logout` needs a bearer token, read
//! by the [`SpotifyToken`] extractor from the `spotify_token` cookie or the
//! `Authorization` header. The token is forwarded to the catalog untouched.
//!
//! ## Empty Results
//!
//! Feature endpoints answer `200` with an empty array when nothing could be
//! found; catalog failures during recommendation never surface as errors.

mod dashboard;
mod error;
mod features;
mod health;
mod session;

pub use dashboard::{DashboardStats, dashboard_stats, listening_stats, me};
pub use error::ApiError;
pub use features::{
    AestheticQuery, MoodQuery, TimeTravelQuery, VibeQuery, aesthetic, alternate, discover, mood,
    time_travel, vibe,
};
pub use health::health;
pub use session::{COOKIE_TOKEN_KEY, SpotifyToken, logout};

use crate::{config, spotify::SpotifyClient};

/// Read-only settings shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub api_url: String,
    pub market: String,
}

impl AppState {
    pub fn from_env() -> Self {
        AppState {
            api_url: config::spotify_apiurl(),
            market: config::spotify_market(),
        }
    }

    pub fn client(&self, token: SpotifyToken) -> SpotifyClient {
        SpotifyClient::with_api_url(token.0, self.api_url.clone())
    }
}
