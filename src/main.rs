use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    value_parser,
};
use clap_complete::{Shell, generate};

use sonicdiscovery::{cli, config, error, recommend::DEFAULT_LIMIT};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Spotify access token (defaults to SPOTIFY_ACCESS_TOKEN)
    #[clap(long, global = true)]
    token: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeOptions),

    /// Recommend tracks from seeds
    Recommend(RecommendOptions),

    #[clap(about = "Tracks released in the decade starting at the given year")]
    Decade(DecadeOptions),

    /// Playlist for a place, its weather and a time of day
    Vibe(VibeOptions),

    /// Playlist for an aesthetic
    Aesthetic(AestheticOptions),

    /// Playlist from the opposite of your taste
    Alternate(LimitOption),

    /// Your top genres, artists, tracks, likes, playlists or listening stats
    Top(TopOptions),

    /// Genre seeds and theme keys
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind (defaults to SERVER_ADDRESS or 127.0.0.1:8000)
    #[clap(long)]
    addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Seed track id; can be repeated
    #[clap(long = "track", action = ArgAction::Append)]
    tracks: Vec<String>,

    /// Seed genre; can be repeated
    #[clap(long = "genre", action = ArgAction::Append)]
    genres: Vec<String>,

    /// Seed artist id, or `name:<artist name>`; can be repeated
    #[clap(long = "artist", action = ArgAction::Append)]
    artists: Vec<String>,

    /// Target valence (0.0 sad - 1.0 happy)
    #[clap(long)]
    valence: Option<f64>,

    /// Target energy (0.0 chill - 1.0 hype)
    #[clap(long)]
    energy: Option<f64>,

    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct DecadeOptions {
    /// First year of the decade, e.g. 1980
    year: i32,

    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct VibeOptions {
    #[clap(long)]
    location: String,
    #[clap(long)]
    weather: String,
    #[clap(long)]
    time: String,
    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct AestheticOptions {
    style: String,
    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct LimitOption {
    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    #[clap(long, value_enum, default_value_t = cli::TopKind::Genres)]
    kind: cli::TopKind,
    #[clap(long, default_value_t = 10, value_parser = value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    #[clap(long)]
    genres: bool,
    #[clap(long)]
    themes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let args = Cli::parse();
    let token = args.token;

    match args.command {
        Command::Serve(opt) => cli::serve(opt.addr).await,
        Command::Recommend(opt) => {
            let args = cli::RecommendArgs {
                tracks: opt.tracks,
                genres: opt.genres,
                artists: opt.artists,
                limit: opt.limit,
                valence: opt.valence,
                energy: opt.energy,
            };
            cli::recommend(token, args).await
        }
        Command::Decade(opt) => cli::decade(token, opt.year, opt.limit).await,
        Command::Vibe(opt) => {
            cli::vibe(token, &opt.location, &opt.weather, &opt.time, opt.limit).await
        }
        Command::Aesthetic(opt) => cli::aesthetic(token, &opt.style, opt.limit).await,
        Command::Alternate(opt) => cli::alternate(token, opt.limit).await,
        Command::Top(opt) => cli::top(token, opt.kind, opt.limit).await,
        Command::Info(opt) => cli::info(opt.genres, opt.themes),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
