//! Healthcheck endpoint

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::coupons::SharedState;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/healthcheck", get(handler))
}

/// Endpoint: GET /healthcheck
async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
