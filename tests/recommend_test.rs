use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use rand::{SeedableRng, rngs::StdRng};
use sonicdiscovery::recommend::{RecommendationRequest, Recommender, SeedSet};
use sonicdiscovery::spotify::{CatalogError, CatalogGateway};
use sonicdiscovery::themes;
use sonicdiscovery::types::{
    AlbumObject, ArtistObject, PlaylistObject, SeedSelection, TargetParams, TimeRange, Track,
    TrackObject,
};

// In-memory catalog that records every call it receives
#[derive(Default)]
struct FakeCatalog {
    recommendations: Option<Vec<TrackObject>>,
    searches: HashMap<String, Vec<TrackObject>>,
    failing_searches: HashSet<String>,
    top_tracks: HashMap<String, Vec<TrackObject>>,
    artists: HashMap<String, ArtistObject>,
    tracks: HashMap<String, TrackObject>,
    calls: Mutex<Vec<String>>,
    offsets: Mutex<Vec<u32>>,
    targets: Mutex<Option<TargetParams>>,
}

impl FakeCatalog {
    fn new() -> Self {
        Self::default()
    }

    fn with_recommendations(mut self, tracks: Vec<TrackObject>) -> Self {
        self.recommendations = Some(tracks);
        self
    }

    fn with_search(mut self, query: &str, tracks: Vec<TrackObject>) -> Self {
        self.searches.insert(query.to_string(), tracks);
        self
    }

    fn with_failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_string());
        self
    }

    fn with_top_tracks(mut self, artist_id: &str, tracks: Vec<TrackObject>) -> Self {
        self.top_tracks.insert(artist_id.to_string(), tracks);
        self
    }

    fn with_artist(mut self, id: &str, name: &str) -> Self {
        let artist = serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap();
        self.artists.insert(id.to_string(), artist);
        self
    }

    fn with_track(mut self, track: TrackObject) -> Self {
        self.tracks.insert(track.id.clone().unwrap_or_default(), track);
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn offsets(&self) -> Vec<u32> {
        self.offsets.lock().unwrap().clone()
    }

    fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }
}

impl CatalogGateway for FakeCatalog {
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        self.record(format!("search:{}", query));
        self.offsets.lock().unwrap().push(offset);
        if self.failing_searches.contains(query) {
            return Err(CatalogError::Status(500));
        }
        let found = self.searches.get(query).cloned().unwrap_or_default();
        Ok(found.into_iter().take(limit as usize).collect())
    }

    async fn recommendations(
        &self,
        seeds: &SeedSelection,
        limit: u32,
        targets: &TargetParams,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        self.record(format!(
            "recommendations:{}={}",
            seeds.query_key(),
            seeds.values().join(",")
        ));
        *self.targets.lock().unwrap() = Some(targets.clone());
        match &self.recommendations {
            Some(tracks) => Ok(tracks.iter().take(limit as usize).cloned().collect()),
            None => Err(CatalogError::NotFound("recommendations".to_string())),
        }
    }

    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        _market: &str,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        self.record(format!("top:{}", artist_id));
        self.top_tracks
            .get(artist_id)
            .cloned()
            .ok_or(CatalogError::Status(404))
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistObject, CatalogError> {
        self.record(format!("artist:{}", artist_id));
        self.artists
            .get(artist_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(artist_id.to_string()))
    }

    async fn tracks(&self, ids: &[String]) -> Result<Vec<Option<TrackObject>>, CatalogError> {
        self.record(format!("tracks:{}", ids.join(",")));
        Ok(ids.iter().map(|id| self.tracks.get(id).cloned()).collect())
    }

    async fn current_user_top_artists(
        &self,
        _limit: u32,
        _time_range: TimeRange,
    ) -> Result<Vec<ArtistObject>, CatalogError> {
        Err(CatalogError::Unauthorized)
    }

    async fn current_user_top_tracks(
        &self,
        _limit: u32,
        _time_range: TimeRange,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        Err(CatalogError::Unauthorized)
    }

    async fn current_user_saved_tracks(
        &self,
        _limit: u32,
    ) -> Result<Vec<TrackObject>, CatalogError> {
        Err(CatalogError::Unauthorized)
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

fn create_track_object(id: &str, artist_id: &str) -> TrackObject {
    let value = serde_json::json!({
        "id": id,
        "name": format!("Track {}", id),
        "artists": [{ "id": artist_id, "name": format!("Artist {}", artist_id) }],
    });
    serde_json::from_value(value).unwrap()
}

// Tracks `<prefix>-0` .. `<prefix>-<count - 1>`
fn create_tracks(prefix: &str, count: usize) -> Vec<TrackObject> {
    (0..count)
        .map(|i| create_track_object(&format!("{}-{}", prefix, i), "artist"))
        .collect()
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

fn assert_unique(tracks: &[Track]) {
    let unique: HashSet<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(unique.len(), tracks.len(), "duplicate ids in {:?}", ids(tracks));
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[tokio::test]
async fn test_primary_results_skip_fallback() {
    let catalog = FakeCatalog::new()
        .with_recommendations(create_tracks("rec", 3))
        .with_search("genre:rock", create_tracks("rock", 20));
    let seeds = SeedSet::new().with_genres(["rock"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(ids(&tracks), vec!["rec-0", "rec-1", "rec-2"]);
    assert_eq!(catalog.calls(), vec!["recommendations:seed_genres=rock"]);
}

#[tokio::test]
async fn test_primary_results_are_deduplicated_and_limited() {
    let mut recs = create_tracks("rec", 4);
    recs.insert(1, create_track_object("rec-0", "artist"));
    let catalog = FakeCatalog::new().with_recommendations(recs);
    let seeds = SeedSet::new().with_tracks(["t1"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 3, &TargetParams::default())
        .await;

    assert_unique(&tracks);
    assert!(tracks.len() <= 3);
}

#[tokio::test]
async fn test_empty_primary_answer_triggers_fallback() {
    let catalog = FakeCatalog::new()
        .with_recommendations(Vec::new())
        .with_search("genre:jazz", create_tracks("jazz", 5));
    let seeds = SeedSet::new().with_genres(["jazz"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 5);
    assert_eq!(catalog.count("search:genre:jazz"), 1);
}

#[tokio::test]
async fn test_genre_fallback_fills_exactly_the_limit() {
    let catalog = FakeCatalog::new().with_search("genre:rock", create_tracks("rock", 20));
    let seeds = SeedSet::new().with_genres(["rock"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 12);
    assert_unique(&tracks);
    assert!(tracks.iter().all(|t| t.id.starts_with("rock-")));
}

#[tokio::test]
async fn test_no_seeds_fall_back_to_pop() {
    let catalog = FakeCatalog::new().with_search("genre:pop", create_tracks("pop", 8));

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&SeedSet::new(), 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 8);
    assert_eq!(
        catalog.calls(),
        vec!["recommendations:seed_genres=pop", "search:genre:pop"]
    );
}

#[tokio::test]
async fn test_zero_limit_makes_no_calls() {
    let catalog = FakeCatalog::new().with_recommendations(create_tracks("rec", 3));

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&SeedSet::new().with_genres(["rock"]), 0, &TargetParams::default())
        .await;

    assert!(tracks.is_empty());
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn test_name_seed_retries_once_with_bare_name() {
    let catalog = FakeCatalog::new()
        .with_search("artist:Foo", Vec::new())
        .with_search("Foo", create_tracks("foo", 2));
    let seeds = SeedSet::new().with_artists(["name:Foo"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 2);
    assert_eq!(catalog.count("search:artist:Foo"), 1);
    assert_eq!(catalog.count("search:Foo"), 1);
}

#[tokio::test]
async fn test_name_seed_with_results_does_not_retry() {
    let catalog = FakeCatalog::new()
        .with_search("artist:Foo", create_tracks("foo", 3))
        .with_search("Foo", create_tracks("bare", 3));
    let seeds = SeedSet::new().with_artists(["name:Foo"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 3);
    assert_eq!(catalog.count("search:Foo"), 0);
}

#[tokio::test]
async fn test_failing_artist_seed_does_not_stop_the_others() {
    let catalog = FakeCatalog::new()
        .with_failing_search("artist:Broken")
        .with_search("artist:Works", create_tracks("works", 4));
    let seeds = SeedSet::new().with_artists(["name:Broken", "name:Works"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 4);
    assert!(tracks.iter().all(|t| t.id.starts_with("works-")));
}

#[tokio::test]
async fn test_artist_id_seed_uses_top_tracks_then_name_search() {
    let catalog = FakeCatalog::new()
        .with_top_tracks("a1", create_tracks("top", 3))
        .with_top_tracks("a2", Vec::new())
        .with_artist("a2", "Quiet Band")
        .with_search("artist:Quiet Band", create_tracks("quiet", 2));
    let seeds = SeedSet::new().with_artists(["a1", "a2"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 5);
    assert_eq!(catalog.count("artist:a1"), 0);
    assert_eq!(catalog.count("artist:a2"), 1);
    assert_eq!(catalog.count("search:artist:Quiet Band"), 1);
}

#[tokio::test]
async fn test_genre_failure_empties_the_result() {
    let catalog = FakeCatalog::new()
        .with_failing_search("genre:rock")
        .with_search("artist:Works", create_tracks("works", 4));
    let seeds = SeedSet::new()
        .with_genres(["rock"])
        .with_artists(["name:Works"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_track_seeds_use_their_primary_artists() {
    let catalog = FakeCatalog::new()
        .with_track(create_track_object("t1", "a1"))
        .with_track(create_track_object("t2", "a1"))
        .with_track(create_track_object("t3", "a2"))
        .with_top_tracks("a1", create_tracks("a1-top", 3))
        .with_top_tracks("a2", create_tracks("a2-top", 3));
    let seeds = SeedSet::new().with_tracks(["t1", "t2", "t3", "unknown"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 6);
    assert_eq!(catalog.count("tracks:t1,t2,t3,unknown"), 1);
    assert_eq!(catalog.count("top:a1"), 1);
    assert_eq!(catalog.count("top:a2"), 1);
}

#[tokio::test]
async fn test_pool_is_deduplicated_across_strategies() {
    let shared = create_tracks("shared", 6);
    let catalog = FakeCatalog::new()
        .with_search("genre:rock", shared.clone())
        .with_search("artist:Foo", shared);
    let seeds = SeedSet::new()
        .with_genres(["rock"])
        .with_artists(["name:Foo"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 6);
    assert_unique(&tracks);
}

#[tokio::test]
async fn test_same_seed_gives_same_order() {
    let catalog = FakeCatalog::new().with_search("genre:rock", create_tracks("rock", 20));
    let seeds = SeedSet::new().with_genres(["rock"]);

    let first = Recommender::new(&catalog, StdRng::seed_from_u64(7))
        .get_recommendations(&seeds, 10, &TargetParams::default())
        .await;
    let second = Recommender::new(&catalog, StdRng::seed_from_u64(7))
        .get_recommendations(&seeds, 10, &TargetParams::default())
        .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_genre_offsets_are_random_and_bounded() {
    let catalog = FakeCatalog::new().with_search("genre:rock", create_tracks("rock", 20));
    let seeds = SeedSet::new().with_genres(["rock"]);

    for seed in 0..20 {
        Recommender::new(&catalog, StdRng::seed_from_u64(seed))
            .get_recommendations(&seeds, 12, &TargetParams::default())
            .await;
    }

    let offsets = catalog.offsets();
    assert_eq!(offsets.len(), 20);
    assert!(offsets.iter().all(|o| *o < 50), "{:?}", offsets);

    let distinct: HashSet<u32> = offsets.into_iter().collect();
    assert!(distinct.len() > 1);
}

#[tokio::test]
async fn test_fallback_pool_is_shuffled() {
    let catalog = FakeCatalog::new().with_search("genre:rock", create_tracks("rock", 20));
    let seeds = SeedSet::new().with_genres(["rock"]);
    let head_order: Vec<String> = (0..20).map(|i| format!("rock-{}", i)).collect();

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 20, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 20);
    assert_ne!(ids(&tracks), head_order);

    let mut sorted: Vec<&str> = ids(&tracks);
    sorted.sort_by_key(|id| id[5..].parse::<usize>().unwrap());
    assert_eq!(sorted, head_order);
}

#[tokio::test]
async fn test_empty_strategies_fall_back_to_pop() {
    let catalog = FakeCatalog::new()
        .with_search("genre:obscure", Vec::new())
        .with_search("genre:pop", create_tracks("pop", 6));
    let seeds = SeedSet::new()
        .with_genres(["obscure"])
        .with_artists(["name:Nobody"]);

    let tracks = Recommender::new(&catalog, rng())
        .get_recommendations(&seeds, 12, &TargetParams::default())
        .await;

    assert_eq!(tracks.len(), 6);
    assert!(tracks.iter().all(|t| t.id.starts_with("pop-")));
    assert_eq!(catalog.count("search:artist:Nobody"), 1);
    assert_eq!(catalog.count("search:Nobody"), 1);
    assert_eq!(catalog.count("search:genre:pop"), 1);
    assert_eq!(catalog.calls().last().map(String::as_str), Some("search:genre:pop"));
}

#[tokio::test]
async fn test_search_decade_queries_year_range() {
    let catalog = FakeCatalog::new().with_search("year:1980-1989", create_tracks("eighties", 4));

    let tracks = Recommender::new(&catalog, rng())
        .search_decade(1980, 1989, 12)
        .await;

    assert_eq!(tracks.len(), 4);
    assert_eq!(catalog.calls(), vec!["search:year:1980-1989"]);
}

#[tokio::test]
async fn test_search_decade_failure_is_empty() {
    let catalog = FakeCatalog::new().with_failing_search("year:1970-1979");

    let tracks = Recommender::new(&catalog, rng())
        .search_decade(1970, 1979, 12)
        .await;

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_theme_request_forwards_targets_and_genres() {
    let catalog = FakeCatalog::new().with_recommendations(create_tracks("rec", 12));
    let request: RecommendationRequest = themes::aesthetic_generator("Vaporwave").into_request(12);

    let tracks = Recommender::new(&catalog, rng()).recommend(&request).await;

    assert_eq!(tracks.len(), 12);
    assert_eq!(
        catalog.calls(),
        vec!["recommendations:seed_genres=synth-pop,electronic,chill,disco"]
    );
    let targets = catalog.targets.lock().unwrap().clone().unwrap();
    assert_eq!(targets.valence, Some(0.55));
    assert_eq!(targets.energy, Some(0.4));
}
