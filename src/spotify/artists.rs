use crate::{
    spotify::{CatalogError, SpotifyClient},
    types::{ArtistObject, TrackListResponse, TrackObject},
};

/// Retrieves an artist's most popular tracks in a market.
///
/// # Arguments
///
/// * `artist_id` - Catalog id of the artist
/// * `market` - ISO country code, e.g. `US`
pub async fn get_top_tracks(
    client: &SpotifyClient,
    artist_id: &str,
    market: &str,
) -> Result<Vec<TrackObject>, CatalogError> {
    let path = format!("/artists/{id}/top-tracks", id = artist_id);
    let params = vec![("market".to_string(), market.to_string())];

    let res = client.get_json::<TrackListResponse>(&path, &params).await?;
    Ok(res.tracks)
}

/// Retrieves a single artist. Used to recover an artist's display name.
pub async fn get_artist(
    client: &SpotifyClient,
    artist_id: &str,
) -> Result<ArtistObject, CatalogError> {
    let path = format!("/artists/{id}", id = artist_id);
    client.get_json::<ArtistObject>(&path, &[]).await
}
