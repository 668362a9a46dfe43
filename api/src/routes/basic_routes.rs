//! GET / and GET /health — trivial liveness surface.

use axum::Json;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to Simple AI Question API" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
