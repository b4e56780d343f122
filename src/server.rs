use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    Res,
    api::{self, AppState},
    config, success, warning,
};

/// Builds the application router with its CORS layer.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/logout", post(api::logout))
        .route("/me", get(api::me))
        .route("/dashboard/stats", get(api::dashboard_stats))
        .route("/dashboard/listening-stats", get(api::listening_stats))
        .route("/features/discover", get(api::discover))
        .route("/features/mood", get(api::mood))
        .route("/features/time-travel", get(api::time_travel))
        .route("/features/vibe", get(api::vibe))
        .route("/features/aesthetic", get(api::aesthetic))
        .route("/features/alternate", get(api::alternate))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warning!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Serves the API on `addr`, or on the configured address when `None`.
pub async fn start_api_server(addr: Option<String>) -> Res<()> {
    let addr = addr.unwrap_or_else(config::server_addr);
    let addr = SocketAddr::from_str(&addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let app = router(AppState::from_env(), &config::allowed_origins());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("SonicDiscovery API listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
