//! # Recommendation Engine
//!
//! Produces a list of tracks for a set of seeds. The engine first asks the
//! catalog's recommendation endpoint; when that call fails or comes back empty
//! it synthesizes a list from search and top-track lookups (see
//! [`Recommender::recommend_via_search`]).
//!
//! ## Result Contract
//!
//! - at most `limit` tracks
//! - no two tracks share an id
//! - catalog failures never escape; the worst outcome is an empty list
//!
//! ## Randomness
//!
//! The genre search offset and the final shuffle draw from the random source
//! owned by the [`Recommender`]. Tests pass a seeded `StdRng`.

mod fallback;
mod seeds;

pub use fallback::primary_artist_ids;
pub use seeds::{ArtistSeed, DEFAULT_GENRE, NAME_SEED_PREFIX, SEED_LIMIT, SeedSet};

use rand::Rng;

use crate::{
    config, info,
    spotify::CatalogGateway,
    types::{TargetParams, Track},
    utils, warning,
};

/// Number of tracks returned by the feature endpoints.
pub const DEFAULT_LIMIT: u32 = 12;

/// A complete recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub seeds: SeedSet,
    pub limit: u32,
    pub targets: TargetParams,
}

impl RecommendationRequest {
    pub fn new(seeds: SeedSet) -> Self {
        RecommendationRequest {
            seeds,
            limit: DEFAULT_LIMIT,
            targets: TargetParams::default(),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn targets(mut self, targets: TargetParams) -> Self {
        self.targets = targets;
        self
    }
}

/// Stateless-per-call recommendation engine over a catalog gateway.
pub struct Recommender<'a, G, R> {
    gateway: &'a G,
    rng: R,
    market: String,
}

impl<'a, G: CatalogGateway, R: Rng> Recommender<'a, G, R> {
    pub fn new(gateway: &'a G, rng: R) -> Self {
        Recommender {
            gateway,
            rng,
            market: config::DEFAULT_MARKET.to_string(),
        }
    }

    /// Market used for artist top-track lookups.
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub async fn recommend(&mut self, request: &RecommendationRequest) -> Vec<Track> {
        self.get_recommendations(&request.seeds, request.limit, &request.targets)
            .await
    }

    /// Returns up to `limit` unique tracks for `seeds`.
    ///
    /// The recommendation endpoint is called once with the seed category
    /// chosen by [`SeedSet::primary_selection`]. A non-empty answer is
    /// returned directly. A failure or an empty answer is logged and the
    /// search based fallback runs with all seed categories.
    pub async fn get_recommendations(
        &mut self,
        seeds: &SeedSet,
        limit: u32,
        targets: &TargetParams,
    ) -> Vec<Track> {
        if limit == 0 {
            return Vec::new();
        }

        let selection = seeds.primary_selection();
        match self.gateway.recommendations(&selection, limit, targets).await {
            Ok(tracks) if !tracks.is_empty() => {
                let tracks = utils::format_tracks(tracks);
                return utils::dedupe_and_truncate(tracks, limit as usize);
            }
            Ok(_) => info!("Recommendation endpoint returned no tracks."),
            Err(e) => warning!("Standard recommendation endpoint failed: {}", e),
        }

        info!("Switching to search based recommendations...");
        self.recommend_via_search(&seeds.genres, &seeds.artists, &seeds.tracks, limit)
            .await
    }

    /// Tracks released between `start_year` and `end_year` (inclusive).
    ///
    /// A single catalog search; failures yield an empty list.
    pub async fn search_decade(&self, start_year: i32, end_year: i32, limit: u32) -> Vec<Track> {
        let query = utils::year_range_query(start_year, end_year);
        match self.gateway.search_tracks(&query, limit, 0).await {
            Ok(tracks) => utils::format_tracks(tracks),
            Err(e) => {
                warning!("Decade search {} failed: {}", query, e);
                Vec::new()
            }
        }
    }
}
