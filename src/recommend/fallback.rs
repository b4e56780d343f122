use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    info,
    recommend::{Recommender, seeds::ArtistSeed, seeds::DEFAULT_GENRE, seeds::SEED_LIMIT},
    spotify::{CatalogError, CatalogGateway},
    types::{Track, TrackObject},
    utils, warning,
};

const GENRE_SEARCH_LIMIT: u32 = 20;
const GENRE_OFFSET_MAX: u32 = 50;
const ARTIST_SEARCH_LIMIT: u32 = 10;
const TRACK_DERIVED_ARTISTS: usize = 3;

impl<G: CatalogGateway, R: Rng> Recommender<'_, G, R> {
    /// Builds recommendations from search and top-track lookups.
    ///
    /// Strategies run in a fixed order and feed one pool:
    ///
    /// 1. **Genres** - `genre:<token>` search per genre, 20 results from a
    ///    random offset below 50.
    /// 2. **Artists** - per seed: name seeds are searched as `artist:<name>`
    ///    and, without results, once more as a bare keyword; id seeds use the
    ///    artist's top tracks and, when those are empty, an `artist:<name>`
    ///    search. A failing seed is skipped.
    /// 3. **Tracks** - the first artist of each of the first five seed tracks,
    ///    at most three distinct artists, contribute their top tracks.
    ///
    /// An empty pool falls back to a `genre:pop` search. The pool is then
    /// shuffled, deduplicated by id and cut to `limit`. Any failure that
    /// escapes a strategy turns the whole result into an empty list.
    pub async fn recommend_via_search(
        &mut self,
        genres: &[String],
        artists: &[ArtistSeed],
        tracks: &[String],
        limit: u32,
    ) -> Vec<Track> {
        match self.synthesize(genres, artists, tracks).await {
            Ok(mut pool) => {
                pool.shuffle(&mut self.rng);
                utils::dedupe_and_truncate(pool, limit as usize)
            }
            Err(e) => {
                warning!("Search based recommendations failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn synthesize(
        &mut self,
        genres: &[String],
        artists: &[ArtistSeed],
        tracks: &[String],
    ) -> Result<Vec<Track>, CatalogError> {
        let mut pool = self.genre_strategy(genres).await?;
        pool.extend(self.artist_strategy(artists).await);
        pool.extend(self.track_strategy(tracks).await);

        if pool.is_empty() {
            let query = format!("genre:{}", DEFAULT_GENRE);
            let found = self
                .gateway
                .search_tracks(&query, GENRE_SEARCH_LIMIT, 0)
                .await?;
            pool.extend(formatted(found));
        }

        Ok(pool)
    }

    async fn genre_strategy(&mut self, genres: &[String]) -> Result<Vec<Track>, CatalogError> {
        let mut found = Vec::new();
        for genre in genres {
            let offset = self.rng.random_range(0..GENRE_OFFSET_MAX);
            let query = format!("genre:{}", genre);
            let tracks = self
                .gateway
                .search_tracks(&query, GENRE_SEARCH_LIMIT, offset)
                .await?;
            found.extend(formatted(tracks));
        }
        Ok(found)
    }

    async fn artist_strategy(&self, artists: &[ArtistSeed]) -> Vec<Track> {
        let mut found = Vec::new();
        for seed in artists {
            match self.artist_seed_tracks(seed).await {
                Ok(tracks) => found.extend(tracks),
                Err(e) => warning!("Artist search error for {}: {}", seed, e),
            }
        }
        found
    }

    async fn artist_seed_tracks(&self, seed: &ArtistSeed) -> Result<Vec<Track>, CatalogError> {
        match seed {
            ArtistSeed::Name(name) => {
                info!("Searching for artist: {}", name);
                let query = format!("artist:{}", name);
                let specific = self
                    .gateway
                    .search_tracks(&query, ARTIST_SEARCH_LIMIT, 0)
                    .await?;
                if !specific.is_empty() {
                    return Ok(formatted(specific));
                }

                info!("Specific search failed, trying general: {}", name);
                let general = self
                    .gateway
                    .search_tracks(name, ARTIST_SEARCH_LIMIT, 0)
                    .await?;
                Ok(formatted(general))
            }
            ArtistSeed::Id(id) => {
                let top = self.gateway.artist_top_tracks(id, &self.market).await?;
                if !top.is_empty() {
                    return Ok(formatted(top));
                }

                let artist = self.gateway.artist(id).await?;
                let query = format!("artist:{}", artist.name);
                let by_name = self
                    .gateway
                    .search_tracks(&query, ARTIST_SEARCH_LIMIT, 0)
                    .await?;
                Ok(formatted(by_name))
            }
        }
    }

    async fn track_strategy(&self, tracks: &[String]) -> Vec<Track> {
        if tracks.is_empty() {
            return Vec::new();
        }

        let seed_ids: Vec<String> = tracks.iter().take(SEED_LIMIT).cloned().collect();
        let resolved = match self.gateway.tracks(&seed_ids).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warning!("Could not resolve seed tracks: {}", e);
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        for artist_id in primary_artist_ids(&resolved, TRACK_DERIVED_ARTISTS) {
            match self.gateway.artist_top_tracks(&artist_id, &self.market).await {
                Ok(top) => found.extend(formatted(top)),
                Err(e) => warning!("Top tracks for artist {} failed: {}", artist_id, e),
            }
        }
        found
    }
}

/// First-listed artist id of each resolved track, distinct, in first-seen
/// order, at most `max` of them.
pub fn primary_artist_ids(tracks: &[Option<TrackObject>], max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    tracks
        .iter()
        .flatten()
        .filter_map(|t| t.artists.first().and_then(|a| a.id.clone()))
        .filter(|id| seen.insert(id.clone()))
        .take(max)
        .collect()
}

fn formatted(tracks: Vec<TrackObject>) -> Vec<Track> {
    utils::format_tracks(tracks)
}
