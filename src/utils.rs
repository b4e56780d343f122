use std::collections::HashSet;

use crate::types::{Track, TrackObject, TrackTableRow};

/// Removes tracks whose id was already seen, keeping the first occurrence.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Converts catalog records, dropping those without an id (local files).
pub fn format_tracks(tracks: Vec<TrackObject>) -> Vec<Track> {
    tracks.into_iter().filter_map(Track::from_object).collect()
}

pub fn dedupe_and_truncate(mut tracks: Vec<Track>, limit: usize) -> Vec<Track> {
    remove_duplicate_tracks(&mut tracks);
    tracks.truncate(limit);
    tracks
}

/// Catalog search expression for a release year range, e.g. `year:1980-1989`.
pub fn year_range_query(start_year: i32, end_year: i32) -> String {
    format!("year:{}-{}", start_year, end_year)
}

/// First and last year of the decade starting at `year`.
pub fn decade_bounds(year: i32) -> (i32, i32) {
    (year, year + 9)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks.iter().map(TrackTableRow::from).collect()
}
