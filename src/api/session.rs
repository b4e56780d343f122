use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::{Value, json};

use crate::{api::ApiError, utils};

pub const COOKIE_TOKEN_KEY: &str = "spotify_token";

/// Bearer token of the calling user.
///
/// Taken from the `spotify_token` cookie, or else from an
/// `Authorization: Bearer <token>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyToken(pub String);

fn token_from_cookies(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(COOKIE_TOKEN_KEY)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

fn token_from_headers(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(utils::bearer_token)
        .map(|t| t.to_string())
}

impl<S: Send + Sync> FromRequestParts<S> for SpotifyToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        token_from_cookies(parts)
            .or_else(|| token_from_headers(parts))
            .map(SpotifyToken)
            .ok_or(ApiError::Unauthorized)
    }
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(Cookie::build(COOKIE_TOKEN_KEY).path("/"));
    (jar, Json(json!({ "status": "logged_out" })))
}
