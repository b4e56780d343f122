use clap::ValueEnum;
use tabled::Table;

use crate::{
    cli::{catalog_client, print_tracks, spinner},
    config,
    dashboard::Dashboard,
    info,
    types::GenreTableRow,
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TopKind {
    #[default]
    Genres,
    Artists,
    Tracks,
    Liked,
    Playlists,
    Stats,
}

pub async fn top(token: Option<String>, kind: TopKind, limit: u32) {
    let client = catalog_client(token);
    let dashboard = Dashboard::new(&client).with_market(config::spotify_market());
    let pb = spinner("Fetching your listening profile...");

    match kind {
        TopKind::Genres => {
            let genres = dashboard.top_genres(limit as usize).await;
            pb.finish_and_clear();
            if genres.is_empty() {
                warning!("No genres found.");
                return;
            }

            let rows: Vec<GenreTableRow> = genres
                .into_iter()
                .map(|g| GenreTableRow {
                    genre: g.genre,
                    count: g.count,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        TopKind::Artists => {
            let artists = dashboard.top_artists(limit).await;
            pb.finish_and_clear();
            if artists.is_empty() {
                warning!("No artists found.");
                return;
            }

            for (rank, artist) in artists.iter().enumerate() {
                println!("{:>2}. {} {}", rank + 1, artist.name, artist.external_url);
            }
        }
        TopKind::Tracks => {
            let tracks = dashboard.top_tracks(limit).await;
            pb.finish_and_clear();
            print_tracks(&tracks);
        }
        TopKind::Liked => {
            let tracks = dashboard.liked_tracks(limit).await;
            pb.finish_and_clear();
            print_tracks(&tracks);
        }
        TopKind::Playlists => {
            let playlists = dashboard.playlists().await;
            pb.finish_and_clear();
            if playlists.is_empty() {
                warning!("No playlists found.");
                return;
            }

            for playlist in playlists.iter().take(limit as usize) {
                println!("    {} ({})", playlist.name, playlist.id);
            }
        }
        TopKind::Stats => {
            let stats = dashboard.listening_stats().await;
            pb.finish_and_clear();

            info!("Top artists: {}", stats.top_artists);
            info!("Top tracks: {}", stats.top_tracks);
            info!("Artists across top tracks: {}", stats.distinct_track_artists);
            info!("Distinct genres: {}", stats.distinct_genres);
            info!("Genre diversity: {:.0}%", stats.genre_diversity * 100.0);
            if let Some(genre) = stats.top_genre {
                info!("Top genre: {}", genre);
            }
        }
    }
}
