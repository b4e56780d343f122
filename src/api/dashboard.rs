use axum::{extract::State, response::Json};
use serde::Serialize;
use serde_json::Value;

use crate::{
    api::{ApiError, AppState, SpotifyToken},
    dashboard::Dashboard,
    types::{AlbumSummary, ArtistSummary, GenreCount, ListeningStats, Track},
};

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub top_genres: Vec<GenreCount>,
    pub top_artists: Vec<ArtistSummary>,
    pub top_tracks: Vec<Track>,
    pub new_releases: Vec<AlbumSummary>,
    pub recent: Vec<Track>,
    pub listening_stats: ListeningStats,
}

pub async fn me(
    State(state): State<AppState>,
    token: SpotifyToken,
) -> Result<Json<Value>, ApiError> {
    let client = state.client(token);
    let profile = Dashboard::new(&client).profile().await?;
    Ok(Json(profile))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    token: SpotifyToken,
) -> Json<DashboardStats> {
    let client = state.client(token);
    let dashboard = Dashboard::new(&client).with_market(state.market.clone());

    Json(DashboardStats {
        top_genres: dashboard.top_genres(5).await,
        top_artists: dashboard.top_artists(5).await,
        top_tracks: dashboard.top_tracks(4).await,
        new_releases: dashboard.new_releases(4).await,
        recent: dashboard.liked_tracks(8).await,
        listening_stats: dashboard.listening_stats().await,
    })
}

pub async fn listening_stats(
    State(state): State<AppState>,
    token: SpotifyToken,
) -> Json<ListeningStats> {
    let client = state.client(token);
    Json(Dashboard::new(&client).listening_stats().await)
}
