use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Static liveness payload. Never touches the completion endpoint.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "hiresense-ai-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
