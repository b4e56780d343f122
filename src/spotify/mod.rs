//! # Spotify Integration Module
//!
//! This module defines the catalog gateway the rest of the application talks to
//! and provides the production implementation on top of the Spotify Web API.
//!
//! ## Architecture
//!
//! ```text
//! Recommendation Engine / Dashboard / HTTP API
//!          ↓
//! CatalogGateway (trait)
//!     ├── SpotifyClient (reqwest, bearer token)
//!     └── test fakes
//!          ↓
//! Spotify Web API
//! ```
//!
//! The engine is generic over [`CatalogGateway`] so it can be exercised against
//! an in-memory fake that counts calls, while production code uses
//! [`SpotifyClient`].
//!
//! ## Endpoint Modules
//!
//! - [`search`] - `GET /search` restricted to tracks
//! - [`tracks`] - `GET /tracks` and `GET /recommendations`
//! - [`artists`] - `GET /artists/{id}` and `GET /artists/{id}/top-tracks`
//! - [`user`] - `GET /me`, top items, saved tracks and playlists
//! - [`releases`] - `GET /browse/new-releases`
//!
//! ## Error Handling
//!
//! Every call returns [`CatalogError`]. The client retries `502 Bad Gateway`
//! a few times and honours `Retry-After` on `429 Too Many Requests` when the
//! wait is reasonable. Everything else is reported to the caller, which for the
//! recommendation engine means "try the next strategy".
//!
//! ## Authentication
//!
//! The client is bound to one opaque bearer token. It never refreshes or
//! inspects it; a rejected token surfaces as [`CatalogError::Unauthorized`].

pub mod artists;
pub mod client;
pub mod releases;
pub mod search;
pub mod tracks;
pub mod user;

pub use client::SpotifyClient;

use thiserror::Error;

use crate::types::{
    AlbumObject, ArtistObject, PlaylistObject, SeedSelection, TargetParams, TimeRange, TrackObject,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("access token rejected by the catalog")]
    Unauthorized,
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Remote track catalog.
///
/// Every method may fail with a [`CatalogError`]. Callers in this crate treat
/// such failures as recoverable.
#[allow(async_fn_in_trait)]
pub trait CatalogGateway {
    /// Track search. `query` uses the catalog's field syntax (`genre:`, `artist:`, `year:`).
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<TrackObject>, CatalogError>;

    async fn recommendations(
        &self,
        seeds: &SeedSelection,
        limit: u32,
        targets: &TargetParams,
    ) -> Result<Vec<TrackObject>, CatalogError>;

    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<TrackObject>, CatalogError>;

    async fn artist(&self, artist_id: &str) -> Result<ArtistObject, CatalogError>;

    /// Batch lookup; ids the catalog does not know come back as `None`.
    async fn tracks(&self, ids: &[String]) -> Result<Vec<Option<TrackObject>>, CatalogError>;

    async fn current_user_top_artists(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<ArtistObject>, CatalogError>;

    async fn current_user_top_tracks(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<TrackObject>, CatalogError>;

    async fn current_user_saved_tracks(&self, limit: u32)
    -> Result<Vec<TrackObject>, CatalogError>;

    async fn new_releases(&self, limit: u32, market: &str)
    -> Result<Vec<AlbumObject>, CatalogError>;

    async fn current_user_playlists(&self, limit: u32)
    -> Result<Vec<PlaylistObject>, CatalogError>;

    async fn current_user(&self) -> Result<serde_json::Value, CatalogError>;
}

impl CatalogGateway for SpotifyClient {
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        search::search_tracks(self, query, limit, offset).await
    }

    async fn recommendations(
        &self,
        seeds: &SeedSelection,
        limit: u32,
        targets: &TargetParams,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        tracks::get_recommendations(self, seeds, limit, targets).await
    }

    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        artists::get_top_tracks(self, artist_id, market).await
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistObject, CatalogError> {
        artists::get_artist(self, artist_id).await
    }

    async fn tracks(&self, ids: &[String]) -> Result<Vec<Option<TrackObject>>, CatalogError> {
        tracks::get_several_tracks(self, ids).await
    }

    async fn current_user_top_artists(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<ArtistObject>, CatalogError> {
        user::get_top_artists(self, limit, time_range).await
    }

    async fn current_user_top_tracks(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        user::get_top_tracks(self, limit, time_range).await
    }

    async fn current_user_saved_tracks(
        &self,
        limit: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        user::get_saved_tracks(self, limit).await
    }

    async fn new_releases(
        &self,
        limit: u32,
        market: &str,
    ) -> Result<Vec<AlbumObject>, CatalogError> {
        releases::get_new_releases(self, limit, market).await
    }

    async fn current_user_playlists(
        &self,
        limit: u32,
    ) -> Result<Vec<PlaylistObject>, CatalogError> {
        user::get_playlists(self, limit).await
    }

    async fn current_user(&self) -> Result<serde_json::Value, CatalogError> {
        user::get_profile(self).await
    }
}
