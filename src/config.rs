//! Configuration management for SonicDiscovery.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the Spotify API location, the bearer token used by the
//! command-line front-end and the HTTP server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The access token is never produced here. It comes from an external session
//! provider and is only passed through.

use dotenv;
use std::{env, path::PathBuf};

/// Default address the HTTP server binds to.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Default base URL of the Spotify Web API.
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Default market used for artist top tracks and new releases.
pub const DEFAULT_MARKET: &str = "US";

/// Origins allowed to call the HTTP API when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sonicdiscovery/.env`. A missing file is not an
/// error: every value has either a default or can be given on the command line.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sonicdiscovery/.env`
/// - macOS: `~/Library/Application Support/sonicdiscovery/.env`
/// - Windows: `%LOCALAPPDATA%/sonicdiscovery/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sonicdiscovery/.env");
    path
}

/// Returns the server address for the HTTP API.
///
/// Reads `SERVER_ADDRESS` and falls back to [`DEFAULT_SERVER_ADDRESS`].
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8000"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL` and falls back to [`DEFAULT_SPOTIFY_API_URL`]. A
/// trailing slash is removed so paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the market used for market-scoped catalog calls.
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

/// Returns the bearer token used by the command-line front-end.
///
/// Retrieves the `SPOTIFY_ACCESS_TOKEN` environment variable. The HTTP server
/// does not use it; there every request carries its own token.
///
/// # Errors
///
/// Returns an error message if the variable is not set or empty.
pub fn spotify_access_token() -> Result<String, String> {
    match env::var("SPOTIFY_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(
            "SPOTIFY_ACCESS_TOKEN must be set or a token passed with --token".to_string(),
        ),
    }
}

/// Returns the origins allowed by the CORS layer of the HTTP API.
///
/// Reads the comma separated `ALLOWED_ORIGINS` variable, ignoring blank
/// entries, and falls back to [`DEFAULT_ALLOWED_ORIGINS`].
pub fn allowed_origins() -> Vec<String> {
    match env::var("ALLOWED_ORIGINS") {
        Ok(raw) => parse_origins(&raw),
        Err(_) => DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|o| o.to_string())
            .collect(),
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
