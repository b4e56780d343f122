use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{config, spotify::CatalogError, warning};

const BAD_GATEWAY_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Spotify Web API client bound to a single user's bearer token.
///
/// The client is cheap to build; the HTTP server creates one per request from
/// the token the request carries.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Creates a client against the configured API base URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(token, config::spotify_apiurl())
    }

    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Performs a `GET` against `path` and decodes the JSON body.
    ///
    /// # Retry Logic
    ///
    /// - `502 Bad Gateway` is retried up to three times with a 10-second delay.
    /// - `429 Too Many Requests` waits for `Retry-After` once when the delay is
    ///   at most 120 seconds; longer delays are reported as
    ///   [`CatalogError::RateLimited`] right away.
    ///
    /// # Errors
    ///
    /// - `401` becomes [`CatalogError::Unauthorized`]
    /// - `404` becomes [`CatalogError::NotFound`]
    /// - any other non-success status becomes [`CatalogError::Status`]
    /// - network and decoding failures become [`CatalogError::Http`]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, CatalogError> {
        let api_url = format!("{uri}{path}", uri = self.api_url, path = path);
        let mut bad_gateway_attempts = 0;
        let mut rate_limited_once = false;

        loop {
            let response = self
                .http
                .get(&api_url)
                .query(query)
                .bearer_auth(&self.token)
                .send()
                .await?;

            match response.status() {
                StatusCode::BAD_GATEWAY if bad_gateway_attempts < BAD_GATEWAY_RETRIES => {
                    bad_gateway_attempts += 1;
                    sleep(BAD_GATEWAY_DELAY).await;
                    continue; // retry
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = retry_after_secs(&response);
                    if retry_after <= MAX_RETRY_AFTER_SECS && !rate_limited_once {
                        rate_limited_once = true;
                        sleep(Duration::from_secs(retry_after)).await;
                        continue;
                    }
                    warning!(
                        "Rate limited on {} (retry after {} seconds), giving up.",
                        path,
                        retry_after
                    );
                    return Err(CatalogError::RateLimited(retry_after));
                }
                StatusCode::UNAUTHORIZED => return Err(CatalogError::Unauthorized),
                StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(path.to_string())),
                status if !status.is_success() => {
                    return Err(CatalogError::Status(status.as_u16()));
                }
                _ => {}
            }

            return Ok(response.json::<T>().await?);
        }
    }
}

fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
