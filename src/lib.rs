//! SonicDiscovery Library
//!
//! This library powers a small music discovery service on top of the Spotify
//! Web API. It exposes "top" dashboard views, themed playlist generators and a
//! recommendation engine that keeps producing results when the upstream
//! recommendation endpoint is unavailable.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the dashboard and feature endpoints
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `dashboard` - Top genres/artists/tracks and other user views
//! - `genres` - The fixed vocabulary of genre seeds the catalog accepts
//! - `recommend` - Recommendation engine with search based fallback
//! - `server` - HTTP server bootstrap
//! - `spotify` - Catalog gateway trait and the Spotify Web API client
//! - `themes` - Mapping of themes (place, weather, aesthetic) to audio targets
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sonicdiscovery::{config, recommend::Recommender, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> sonicdiscovery::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::new(config::spotify_access_token()?);
//!     let mut engine = Recommender::new(&client, rand::rng());
//!     let tracks = engine.search_decade(1980, 1989, 12).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod genres;
pub mod recommend;
pub mod server;
pub mod spotify;
pub mod themes;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the bootstrap code of the
/// application (CLI commands, server start) using a boxed dynamic error trait
/// object. The core modules use their own error enums and convert into this
/// one at the edges.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Switching to search based recommendations...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Server listening on {}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the command-line and
/// bootstrap code use it; the recommendation engine and the HTTP handlers
/// never terminate the process.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed catalog call that the
/// recommendation engine absorbs by switching to its next strategy.
///
/// # Example
///
/// ```
/// warning!("Recommendation endpoint failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
