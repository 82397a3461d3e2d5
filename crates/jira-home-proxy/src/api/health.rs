use axum::Json;
use serde_json::{json, Value};

/// Liveness check; never touches configuration or upstream
pub async fn health() -> Json<Value> {
    tracing::info!("Health check - PONG!");
    Json(json!({ "status": "ok" }))
}
