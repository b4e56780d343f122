use sonicdiscovery::dashboard::{Dashboard, listening_stats};
use sonicdiscovery::recommend::ArtistSeed;
use sonicdiscovery::spotify::{CatalogError, CatalogGateway};
use sonicdiscovery::types::{
    AlbumObject, ArtistObject, PlaylistObject, SeedSelection, TargetParams, TimeRange,
    TrackObject,
};

// Catalog serving a fixed listening history; `None` parts fail
#[derive(Default)]
struct FakeLibrary {
    top_artists: Option<Vec<ArtistObject>>,
    top_tracks: Option<Vec<TrackObject>>,
    saved_tracks: Option<Vec<TrackObject>>,
}

impl CatalogGateway for FakeLibrary {
    async fn search_tracks(
        &self,
        _query: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        Ok(Vec::new())
    }

    async fn recommendations(
        &self,
        _seeds: &SeedSelection,
        _limit: u32,
        _targets: &TargetParams,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        Ok(Vec::new())
    }

    async fn artist_top_tracks(
        &self,
        _artist_id: &str,
        _market: &str,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        Ok(Vec::new())
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistObject, CatalogError> {
        Err(CatalogError::NotFound(artist_id.to_string()))
    }

    async fn tracks(&self, _ids: &[String]) -> Result<Vec<Option<TrackObject>>, CatalogError> {
        Ok(Vec::new())
    }

    async fn current_user_top_artists(
        &self,
        limit: u32,
        _time_range: TimeRange,
    ) -> Result<Vec<ArtistObject>, CatalogError> {
        let artists = self.top_artists.clone().ok_or(CatalogError::Status(500))?;
        Ok(artists.into_iter().take(limit as usize).collect())
    }

    async fn current_user_top_tracks(
        &self,
        limit: u32,
        _time_range: TimeRange,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        let tracks = self.top_tracks.clone().ok_or(CatalogError::Status(500))?;
        Ok(tracks.into_iter().take(limit as usize).collect())
    }

    async fn current_user_saved_tracks(
        &self,
        limit: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        let tracks = self.saved_tracks.clone().ok_or(CatalogError::Status(500))?;
        Ok(tracks.into_iter().take(limit as usize).collect())
    }

    async fn new_releases(
        &self,
        _limit: u32,
        _market: &str,
    ) -> Result<Vec<AlbumObject>, CatalogError> {
        Err(CatalogError::Unauthorized)
    }

    async fn current_user_playlists(
        &self,
        _limit: u32,
    ) -> Result<Vec<PlaylistObject>, CatalogError> {
        Err(CatalogError::Unauthorized)
    }

    async fn current_user(&self) -> Result<serde_json::Value, CatalogError> {
        Err(CatalogError::Unauthorized)
    }
}

fn create_artist(id: &str, genres: &[&str]) -> ArtistObject {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Artist {}", id),
        "genres": genres,
    }))
    .unwrap()
}

// `id: None` produces a local file record
fn create_track(id: Option<&str>, artist_ids: &[&str]) -> TrackObject {
    let artists: Vec<serde_json::Value> = artist_ids
        .iter()
        .map(|a| serde_json::json!({ "id": a, "name": format!("Artist {}", a) }))
        .collect();
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Track",
        "artists": artists,
    }))
    .unwrap()
}

#[tokio::test]
async fn test_liked_tracks_skip_local_files() {
    let library = FakeLibrary {
        saved_tracks: Some(vec![
            create_track(Some("t1"), &["a1"]),
            create_track(None, &[]),
            create_track(Some("t2"), &["a2"]),
        ]),
        ..Default::default()
    };
    let dashboard = Dashboard::new(&library);

    let liked = dashboard.liked_tracks(8).await;
    assert_eq!(liked.len(), 2);
    assert_eq!(
        dashboard.liked_track_seeds(8).await,
        vec!["t1".to_string(), "t2".to_string()]
    );
}

#[tokio::test]
async fn test_mixed_seeds_use_likes_and_top_artists() {
    let library = FakeLibrary {
        top_artists: Some(
            ["a1", "a2", "a3", "a4", "a5", "a6"]
                .iter()
                .map(|id| create_artist(id, &[]))
                .collect(),
        ),
        saved_tracks: Some(vec![
            create_track(None, &[]),
            create_track(Some("t1"), &["a1"]),
        ]),
        ..Default::default()
    };

    let seeds = Dashboard::new(&library).mixed_seeds().await;

    assert_eq!(seeds.tracks, vec!["t1".to_string()]);
    assert_eq!(seeds.artists.len(), 5);
    assert_eq!(seeds.artists[0], ArtistSeed::Id("a1".to_string()));
    assert_eq!(
        seeds.primary_selection(),
        SeedSelection::Tracks(vec!["t1".to_string()])
    );
}

#[tokio::test]
async fn test_mixed_seeds_degrade_to_empty() {
    let library = FakeLibrary::default();

    let seeds = Dashboard::new(&library).mixed_seeds().await;

    assert!(seeds.is_empty());
}

#[test]
fn test_listening_stats_counts() {
    let artists = vec![
        create_artist("a1", &["indie rock", "indie"]),
        create_artist("a2", &["indie rock"]),
        create_artist("a3", &["jazz"]),
    ];
    let tracks = vec![
        create_track(Some("t1"), &["a1", "a2"]),
        create_track(Some("t2"), &["a1"]),
        create_track(Some("t3"), &["a9"]),
    ];

    let stats = listening_stats(&artists, &tracks);

    assert_eq!(stats.top_artists, 3);
    assert_eq!(stats.top_tracks, 3);
    assert_eq!(stats.distinct_track_artists, 3);
    assert_eq!(stats.distinct_genres, 3);
    assert_eq!(stats.top_genre.as_deref(), Some("indie rock"));
    assert!((stats.genre_diversity - 0.75).abs() < 1e-9);
}

#[test]
fn test_listening_stats_without_history() {
    let stats = listening_stats(&[], &[]);

    assert_eq!(stats.top_artists, 0);
    assert_eq!(stats.distinct_genres, 0);
    assert_eq!(stats.top_genre, None);
    assert_eq!(stats.genre_diversity, 0.0);
}

#[tokio::test]
async fn test_dashboard_listening_stats_survive_failures() {
    let library = FakeLibrary {
        top_artists: Some(vec![create_artist("a1", &["pop"])]),
        ..Default::default()
    };

    let stats = Dashboard::new(&library).listening_stats().await;

    assert_eq!(stats.top_artists, 1);
    assert_eq!(stats.top_tracks, 0);
    assert_eq!(stats.top_genre.as_deref(), Some("pop"));
}
