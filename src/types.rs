use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Track record as returned by the catalog.
///
/// Local files in a user's library come back without an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Paging<TrackObject>,
}

/// Body of `/recommendations` and `/artists/{id}/top-tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackListResponse {
    pub tracks: Vec<TrackObject>,
}

/// Body of `/tracks?ids=`; unknown ids come back as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<TrackObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub track: TrackObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: Paging<AlbumObject>,
}

/// A track as handed to the UI.
///
/// Built from a [`TrackObject`] and never mutated afterwards. A catalog record
/// without album art yields `image_url: None`; one without an id yields no
/// track at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub preview_url: Option<String>,
    pub external_url: String,
    pub image_url: Option<String>,
    pub uri: String,
}

impl Track {
    pub fn from_object(track: TrackObject) -> Option<Self> {
        let id = track.id.filter(|id| !id.is_empty())?;
        let image_url = track
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url);

        Some(Track {
            id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            preview_url: track.preview_url,
            external_url: track.external_urls.spotify,
            image_url,
            uri: track.uri,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub name: String,
    pub image_url: Option<String>,
    pub external_url: String,
}

impl From<ArtistObject> for ArtistSummary {
    fn from(artist: ArtistObject) -> Self {
        ArtistSummary {
            name: artist.name,
            image_url: artist.images.into_iter().next().map(|i| i.url),
            external_url: artist.external_urls.spotify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub name: String,
    pub artists: Vec<String>,
    pub image_url: Option<String>,
    pub external_url: String,
    pub release_date: String,
}

impl From<AlbumObject> for AlbumSummary {
    fn from(album: AlbumObject) -> Self {
        AlbumSummary {
            name: album.name,
            artists: album.artists.into_iter().map(|a| a.name).collect(),
            image_url: album.images.into_iter().next().map(|i| i.url),
            external_url: album.external_urls.spotify,
            release_date: album.release_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Aggregates over the user's top artists and top tracks.
///
/// `genre_diversity` is the share of distinct genres among all genre tags of
/// the top artists, `0.0` when there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListeningStats {
    pub top_artists: usize,
    pub top_tracks: usize,
    pub distinct_track_artists: usize,
    pub distinct_genres: usize,
    pub top_genre: Option<String>,
    pub genre_diversity: f64,
}

/// The one seed category sent to the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSelection {
    Tracks(Vec<String>),
    Genres(Vec<String>),
    Artists(Vec<String>),
}

impl SeedSelection {
    pub fn query_key(&self) -> &'static str {
        match self {
            SeedSelection::Tracks(_) => "seed_tracks",
            SeedSelection::Genres(_) => "seed_genres",
            SeedSelection::Artists(_) => "seed_artists",
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            SeedSelection::Tracks(v) | SeedSelection::Genres(v) | SeedSelection::Artists(v) => v,
        }
    }
}

/// Audio targets for the recommendation endpoint.
///
/// Values are forwarded as given; range checks are left to the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetParams {
    pub valence: Option<f64>,
    pub energy: Option<f64>,
    pub extra: BTreeMap<String, String>,
}

impl TargetParams {
    pub fn new(valence: Option<f64>, energy: Option<f64>) -> Self {
        TargetParams {
            valence,
            energy,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(valence) = self.valence {
            pairs.push(("target_valence".to_string(), valence.to_string()));
        }
        if let Some(energy) = self.energy {
            pairs.push(("target_energy".to_string(), energy.to_string()));
        }
        pairs.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        };
        write!(f, "{}", s)
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub link: String,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        TrackTableRow {
            name: track.name.clone(),
            artists: track.artists.join(", "),
            link: track.external_url.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub count: usize,
}
