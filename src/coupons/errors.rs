//! Coupon service errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use super::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    #[error("Coupon not found with id: {0}")]
    NotFound(u64),

    #[error("{0}")]
    BadRequest(String),
}

impl CouponsServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CouponsServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, "{}", self);

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
