use crate::{
    spotify::{CatalogError, SpotifyClient},
    types::{SeedSelection, SeveralTracksResponse, TargetParams, TrackListResponse, TrackObject},
};

/// Maximum number of ids accepted by `GET /tracks`.
pub const SEVERAL_TRACKS_LIMIT: usize = 50;

/// Asks the recommendation endpoint for tracks similar to the given seeds.
///
/// Only one seed category is sent. Target parameters are appended as
/// `target_*` query pairs and any extra pairs are forwarded untouched.
///
/// The endpoint is deprecated for many applications and frequently answers
/// with `404` or an empty list; callers must be ready for both.
pub async fn get_recommendations(
    client: &SpotifyClient,
    seeds: &SeedSelection,
    limit: u32,
    targets: &TargetParams,
) -> Result<Vec<TrackObject>, CatalogError> {
    let mut params = vec![
        (seeds.query_key().to_string(), seeds.values().join(",")),
        ("limit".to_string(), limit.to_string()),
    ];
    params.extend(targets.query_pairs());

    let res = client
        .get_json::<TrackListResponse>("/recommendations", &params)
        .await?;
    Ok(res.tracks)
}

/// Retrieves full track records for a batch of ids.
///
/// Ids beyond the endpoint limit are ignored. Unknown ids are returned as
/// `None` in their position.
pub async fn get_several_tracks(
    client: &SpotifyClient,
    ids: &[String],
) -> Result<Vec<Option<TrackObject>>, CatalogError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let track_ids = ids
        .iter()
        .take(SEVERAL_TRACKS_LIMIT)
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let params = vec![("ids".to_string(), track_ids)];

    let res = client
        .get_json::<SeveralTracksResponse>("/tracks", &params)
        .await?;
    Ok(res.tracks)
}
