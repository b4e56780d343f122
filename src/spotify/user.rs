use crate::{
    spotify::{CatalogError, SpotifyClient},
    types::{ArtistObject, Paging, PlaylistObject, SavedTrack, TimeRange, TrackObject},
};

/// Retrieves the profile of the token's owner as raw JSON.
///
/// The profile is passed through to the UI unchanged.
pub async fn get_profile(client: &SpotifyClient) -> Result<serde_json::Value, CatalogError> {
    client.get_json::<serde_json::Value>("/me", &[]).await
}

/// Retrieves the user's most listened artists over `time_range`.
pub async fn get_top_artists(
    client: &SpotifyClient,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<ArtistObject>, CatalogError> {
    let params = top_params(limit, time_range);
    let res = client
        .get_json::<Paging<ArtistObject>>("/me/top/artists", &params)
        .await?;
    Ok(res.items)
}

/// Retrieves the user's most listened tracks over `time_range`.
pub async fn get_top_tracks(
    client: &SpotifyClient,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<TrackObject>, CatalogError> {
    let params = top_params(limit, time_range);
    let res = client
        .get_json::<Paging<TrackObject>>("/me/top/tracks", &params)
        .await?;
    Ok(res.items)
}

/// Retrieves the most recently liked tracks.
pub async fn get_saved_tracks(
    client: &SpotifyClient,
    limit: u32,
) -> Result<Vec<TrackObject>, CatalogError> {
    let params = vec![("limit".to_string(), limit.to_string())];
    let res = client
        .get_json::<Paging<SavedTrack>>("/me/tracks", &params)
        .await?;
    Ok(res.items.into_iter().map(|saved| saved.track).collect())
}

pub async fn get_playlists(
    client: &SpotifyClient,
    limit: u32,
) -> Result<Vec<PlaylistObject>, CatalogError> {
    let params = vec![("limit".to_string(), limit.to_string())];
    let res = client
        .get_json::<Paging<PlaylistObject>>("/me/playlists", &params)
        .await?;
    Ok(res.items)
}

fn top_params(limit: u32, time_range: TimeRange) -> Vec<(String, String)> {
    vec![
        ("limit".to_string(), limit.to_string()),
        ("time_range".to_string(), time_range.to_string()),
    ]
}
