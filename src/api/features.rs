use axum::{
    extract::{Query, State},
    response::Json,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
    api::{AppState, SpotifyToken},
    dashboard::Dashboard,
    recommend::{DEFAULT_LIMIT, Recommender, SeedSet},
    spotify::SpotifyClient,
    themes,
    types::{TargetParams, Track},
    utils,
};

const DISCOVER_FALLBACK_GENRES: [&str; 2] = ["pop", "rock"];

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub valence: f64,
    pub energy: f64,
}

#[derive(Debug, Deserialize)]
pub struct TimeTravelQuery {
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct VibeQuery {
    pub location: String,
    pub weather: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct AestheticQuery {
    pub style: String,
}

fn recommender<'a>(
    client: &'a SpotifyClient,
    state: &AppState,
) -> Recommender<'a, SpotifyClient, StdRng> {
    Recommender::new(client, StdRng::from_os_rng()).with_market(state.market.clone())
}

async fn mixed_seeds(client: &SpotifyClient) -> SeedSet {
    Dashboard::new(client).mixed_seeds().await
}

pub async fn discover(State(state): State<AppState>, token: SpotifyToken) -> Json<Vec<Track>> {
    let client = state.client(token);
    let mut seeds = mixed_seeds(&client).await;
    if seeds.is_empty() {
        seeds = seeds.with_genres(DISCOVER_FALLBACK_GENRES);
    }

    let tracks = recommender(&client, &state)
        .get_recommendations(&seeds, DEFAULT_LIMIT, &TargetParams::default())
        .await;
    Json(tracks)
}

pub async fn mood(
    State(state): State<AppState>,
    token: SpotifyToken,
    Query(query): Query<MoodQuery>,
) -> Json<Vec<Track>> {
    let client = state.client(token);
    // an empty seed set falls back to the default genre
    let seeds = mixed_seeds(&client).await;
    let targets = TargetParams::new(Some(query.valence), Some(query.energy));

    let tracks = recommender(&client, &state)
        .get_recommendations(&seeds, DEFAULT_LIMIT, &targets)
        .await;
    Json(tracks)
}

pub async fn time_travel(
    State(state): State<AppState>,
    token: SpotifyToken,
    Query(query): Query<TimeTravelQuery>,
) -> Json<Vec<Track>> {
    let client = state.client(token);
    let (start, end) = utils::decade_bounds(query.year);

    let tracks = recommender(&client, &state)
        .search_decade(start, end, DEFAULT_LIMIT)
        .await;
    Json(tracks)
}

pub async fn vibe(
    State(state): State<AppState>,
    token: SpotifyToken,
    Query(query): Query<VibeQuery>,
) -> Json<Vec<Track>> {
    let client = state.client(token);
    let request = themes::vibe_teleporter(&query.location, &query.weather, &query.time)
        .into_request(DEFAULT_LIMIT);

    Json(recommender(&client, &state).recommend(&request).await)
}

pub async fn aesthetic(
    State(state): State<AppState>,
    token: SpotifyToken,
    Query(query): Query<AestheticQuery>,
) -> Json<Vec<Track>> {
    let client = state.client(token);
    let request = themes::aesthetic_generator(&query.style).into_request(DEFAULT_LIMIT);

    Json(recommender(&client, &state).recommend(&request).await)
}

pub async fn alternate(State(state): State<AppState>, token: SpotifyToken) -> Json<Vec<Track>> {
    let client = state.client(token);
    let top_genres: Vec<String> = Dashboard::new(&client)
        .top_genres(10)
        .await
        .into_iter()
        .map(|g| g.genre)
        .collect();
    let request = themes::alternate_you(&top_genres).into_request(DEFAULT_LIMIT);

    Json(recommender(&client, &state).recommend(&request).await)
}
