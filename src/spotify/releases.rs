use crate::{
    spotify::{CatalogError, SpotifyClient},
    types::{AlbumObject, NewReleasesResponse},
};

/// Retrieves the latest album releases featured in a market.
pub async fn get_new_releases(
    client: &SpotifyClient,
    limit: u32,
    market: &str,
) -> Result<Vec<AlbumObject>, CatalogError> {
    let params = vec![
        ("limit".to_string(), limit.to_string()),
        ("country".to_string(), market.to_string()),
    ];

    let res = client
        .get_json::<NewReleasesResponse>("/browse/new-releases", &params)
        .await?;
    Ok(res.albums.items)
}
