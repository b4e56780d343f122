use crate::{
    spotify::{CatalogError, SpotifyClient},
    types::{SearchTracksResponse, TrackObject},
};

/// Largest page the search endpoint accepts.
pub const SEARCH_LIMIT_MAX: u32 = 50;

/// Searches the catalog for tracks.
///
/// The query is sent as-is, so field filters such as `genre:jazz`,
/// `artist:Nujabes` or `year:1980-1989` are interpreted by the catalog.
///
/// # Arguments
///
/// * `client` - Client bound to the user's token
/// * `query` - Search expression
/// * `limit` - Maximum number of tracks to return, capped at [`SEARCH_LIMIT_MAX`]
/// * `offset` - Index of the first result, used to page past the head of the results
pub async fn search_tracks(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<TrackObject>, CatalogError> {
    let params = search_params(query, limit, offset);
    let res = client
        .get_json::<SearchTracksResponse>("/search", &params)
        .await?;
    Ok(res.tracks.items)
}

/// Query pairs of a track search.
pub fn search_params(query: &str, limit: u32, offset: u32) -> Vec<(String, String)> {
    vec![
        ("q".to_string(), query.to_string()),
        ("type".to_string(), "track".to_string()),
        ("limit".to_string(), limit.min(SEARCH_LIMIT_MAX).to_string()),
        ("offset".to_string(), offset.to_string()),
    ]
}
