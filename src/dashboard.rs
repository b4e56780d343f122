//! User-facing "top" views: genres, artists, tracks, releases and likes,
//! plus listening statistics and the mixed seeds of the discover features.
//!
//! Every view degrades to an empty list when the catalog call fails, so a
//! dashboard renders whatever is available. Only [`Dashboard::profile`]
//! reports errors, since it is how the HTTP layer notices a rejected token.

use std::collections::{HashMap, HashSet};

use crate::{
    config,
    recommend::{SEED_LIMIT, SeedSet},
    spotify::{CatalogError, CatalogGateway},
    types::{
        AlbumSummary, ArtistObject, ArtistSummary, GenreCount, ListeningStats, PlaylistSummary,
        TimeRange, Track, TrackObject,
    },
    utils, warning,
};

/// Number of top artists sampled to compute the top genres.
const GENRE_SAMPLE_ARTISTS: u32 = 20;
const PLAYLIST_LIMIT: u32 = 20;
/// Top artists and top tracks sampled for the listening statistics.
const STATS_SAMPLE: u32 = 50;

pub struct Dashboard<'a, G> {
    gateway: &'a G,
    market: String,
}

impl<'a, G: CatalogGateway> Dashboard<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Dashboard {
            gateway,
            market: config::DEFAULT_MARKET.to_string(),
        }
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub async fn profile(&self) -> Result<serde_json::Value, CatalogError> {
        self.gateway.current_user().await
    }

    /// Most frequent genres among the user's top artists, most frequent first.
    pub async fn top_genres(&self, limit: usize) -> Vec<GenreCount> {
        match self
            .gateway
            .current_user_top_artists(GENRE_SAMPLE_ARTISTS, TimeRange::MediumTerm)
            .await
        {
            Ok(artists) => count_genres(artists.iter().flat_map(|a| a.genres.iter()), limit),
            Err(e) => {
                warning!("Failed to load top genres: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn top_artists(&self, limit: u32) -> Vec<ArtistSummary> {
        match self
            .gateway
            .current_user_top_artists(limit, TimeRange::MediumTerm)
            .await
        {
            Ok(artists) => artists.into_iter().map(ArtistSummary::from).collect(),
            Err(e) => {
                warning!("Failed to load top artists: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn top_tracks(&self, limit: u32) -> Vec<Track> {
        match self
            .gateway
            .current_user_top_tracks(limit, TimeRange::MediumTerm)
            .await
        {
            Ok(tracks) => utils::format_tracks(tracks),
            Err(e) => {
                warning!("Failed to load top tracks: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn new_releases(&self, limit: u32) -> Vec<AlbumSummary> {
        match self.gateway.new_releases(limit, &self.market).await {
            Ok(albums) => albums.into_iter().map(AlbumSummary::from).collect(),
            Err(e) => {
                warning!("Failed to load new releases: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn liked_tracks(&self, limit: u32) -> Vec<Track> {
        match self.gateway.current_user_saved_tracks(limit).await {
            Ok(tracks) => utils::format_tracks(tracks),
            Err(e) => {
                warning!("Failed to load liked tracks: {}", e);
                Vec::new()
            }
        }
    }

    /// Ids of the most recently liked tracks, used as recommendation seeds.
    pub async fn liked_track_seeds(&self, limit: u32) -> Vec<String> {
        self.liked_tracks(limit)
            .await
            .into_iter()
            .map(|t| t.id)
            .collect()
    }

    /// Seeds for the discover and mood features: the most recently liked
    /// tracks and the user's top artists, at most [`SEED_LIMIT`] of each.
    ///
    /// Either part is empty when its catalog call fails.
    pub async fn mixed_seeds(&self) -> SeedSet {
        let tracks = self.liked_track_seeds(SEED_LIMIT as u32).await;
        let artists: Vec<String> = match self
            .gateway
            .current_user_top_artists(SEED_LIMIT as u32, TimeRange::MediumTerm)
            .await
        {
            Ok(artists) => artists.into_iter().map(|a| a.id).collect(),
            Err(e) => {
                warning!("Failed to load top artist seeds: {}", e);
                Vec::new()
            }
        };

        SeedSet::new().with_tracks(tracks).with_artists(artists)
    }

    pub async fn listening_stats(&self) -> ListeningStats {
        let artists = self
            .gateway
            .current_user_top_artists(STATS_SAMPLE, TimeRange::MediumTerm)
            .await
            .unwrap_or_else(|e| {
                warning!("Failed to load top artists for stats: {}", e);
                Vec::new()
            });
        let tracks = self
            .gateway
            .current_user_top_tracks(STATS_SAMPLE, TimeRange::MediumTerm)
            .await
            .unwrap_or_else(|e| {
                warning!("Failed to load top tracks for stats: {}", e);
                Vec::new()
            });

        listening_stats(&artists, &tracks)
    }

    pub async fn playlists(&self) -> Vec<PlaylistSummary> {
        match self.gateway.current_user_playlists(PLAYLIST_LIMIT).await {
            Ok(playlists) => playlists
                .into_iter()
                .map(|p| PlaylistSummary {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
            Err(e) => {
                warning!("Failed to load playlists: {}", e);
                Vec::new()
            }
        }
    }
}

/// Computes [`ListeningStats`] from top artists and top tracks.
///
/// Track artists are counted by id, falling back to the name for artists
/// without one. The top genre follows the ordering of [`count_genres`].
pub fn listening_stats(artists: &[ArtistObject], tracks: &[TrackObject]) -> ListeningStats {
    let tags: Vec<&String> = artists.iter().flat_map(|a| a.genres.iter()).collect();
    let ranked = count_genres(tags.iter().copied(), usize::MAX);

    let genre_diversity = if tags.is_empty() {
        0.0
    } else {
        ranked.len() as f64 / tags.len() as f64
    };

    let distinct_track_artists = tracks
        .iter()
        .flat_map(|t| t.artists.iter())
        .map(|a| a.id.as_deref().unwrap_or(a.name.as_str()))
        .collect::<HashSet<_>>()
        .len();

    ListeningStats {
        top_artists: artists.len(),
        top_tracks: tracks.len(),
        distinct_track_artists,
        distinct_genres: ranked.len(),
        top_genre: ranked.into_iter().next().map(|g| g.genre),
        genre_diversity,
    }
}

/// Counts genre occurrences; sorted by count descending, then by name.
pub fn count_genres<'g, I>(genres: I, limit: usize) -> Vec<GenreCount>
where
    I: IntoIterator<Item = &'g String>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for genre in genres {
        *counts.entry(genre.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    ranked.truncate(limit);
    ranked
}
