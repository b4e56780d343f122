use axum::response::Json;
use serde_json::{Value, json};

use crate::genres;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "genre_seeds": genres::len(),
    }))
}
