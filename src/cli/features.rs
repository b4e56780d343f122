use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{catalog_client, print_tracks, spinner},
    config, genres, info,
    dashboard::Dashboard,
    recommend::{RecommendationRequest, Recommender, SeedSet},
    spotify::SpotifyClient,
    themes::{self, ThemeParams},
    types::TargetParams,
    utils, warning,
};

/// Options of the `recommend` command.
#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    pub tracks: Vec<String>,
    pub genres: Vec<String>,
    pub artists: Vec<String>,
    pub limit: u32,
    pub valence: Option<f64>,
    pub energy: Option<f64>,
}

fn recommender(client: &SpotifyClient) -> Recommender<'_, SpotifyClient, StdRng> {
    Recommender::new(client, StdRng::from_os_rng()).with_market(config::spotify_market())
}

/// Recommendations for explicit seeds.
///
/// Unknown genre seeds are reported but still passed on; the search fallback
/// can use them even when the recommendation endpoint rejects them.
pub async fn recommend(token: Option<String>, args: RecommendArgs) {
    for genre in args.genres.iter().filter(|g| !genres::is_valid(g)) {
        warning!("'{}' is not a known genre seed.", genre);
    }

    let client = catalog_client(token);
    let seeds = SeedSet::new()
        .with_tracks(args.tracks)
        .with_genres(args.genres)
        .with_artists(args.artists);
    let request = RecommendationRequest::new(seeds)
        .limit(args.limit)
        .targets(TargetParams::new(args.valence, args.energy));

    let pb = spinner("Fetching recommendations...");
    let tracks = recommender(&client).recommend(&request).await;
    pb.finish_and_clear();

    print_tracks(&tracks);
}

pub async fn decade(token: Option<String>, year: i32, limit: u32) {
    let client = catalog_client(token);
    let (start, end) = utils::decade_bounds(year);

    let pb = spinner(&format!("Travelling to {}-{}...", start, end));
    let tracks = recommender(&client).search_decade(start, end, limit).await;
    pb.finish_and_clear();

    print_tracks(&tracks);
}

pub async fn vibe(token: Option<String>, location: &str, weather: &str, time: &str, limit: u32) {
    let theme = themes::vibe_teleporter(location, weather, time);
    run_theme(token, theme, limit).await;
}

pub async fn aesthetic(token: Option<String>, style: &str, limit: u32) {
    let theme = themes::aesthetic_generator(style);
    run_theme(token, theme, limit).await;
}

pub async fn alternate(token: Option<String>, limit: u32) {
    let client = catalog_client(token);

    let pb = spinner("Analysing your top genres...");
    let top_genres: Vec<String> = Dashboard::new(&client)
        .top_genres(10)
        .await
        .into_iter()
        .map(|g| g.genre)
        .collect();
    pb.finish_and_clear();

    if !top_genres.is_empty() {
        info!("Your top genres: {}", top_genres.join(", "));
    }

    let theme = themes::alternate_you(&top_genres);
    run_theme_with(&client, theme, limit).await;
}

async fn run_theme(token: Option<String>, theme: ThemeParams, limit: u32) {
    let client = catalog_client(token);
    run_theme_with(&client, theme, limit).await;
}

async fn run_theme_with(client: &SpotifyClient, theme: ThemeParams, limit: u32) {
    info!(
        "Targets: valence {:.2}, energy {:.2}, genres {}",
        theme.valence,
        theme.energy,
        theme.genres.join(", ")
    );

    let request = theme.into_request(limit);
    let pb = spinner("Fetching recommendations...");
    let tracks = recommender(client).recommend(&request).await;
    pb.finish_and_clear();

    print_tracks(&tracks);
}
