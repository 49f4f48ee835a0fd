//! REST API handlers for coupon operations
//!
//! This module implements the HTTP endpoints for coupon CRUD, applicable
//! coupon discovery and coupon application.

use super::{errors::CouponsServiceError, models::*, service, state::SharedState};
use crate::cart::Cart;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

/// Creates routes for coupon-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/coupons", post(create_coupon).get(list_coupons))
        .route(
            "/coupons/:id",
            get(get_coupon).put(update_coupon).delete(delete_coupon),
        )
        .route("/applicable-coupons", post(applicable_coupons))
        .route("/apply-coupon/:id", post(apply_coupon))
}

/// Endpoint: POST /coupons
async fn create_coupon(
    State(state): State<SharedState>,
    Json(payload): Json<CreateCouponRequest>,
) -> impl IntoResponse {
    let coupon = service::create_coupon(&state.coupons, payload);
    (StatusCode::CREATED, Json(coupon))
}

/// Endpoint: GET /coupons
async fn list_coupons(State(state): State<SharedState>) -> Json<Vec<Coupon>> {
    Json(service::list_coupons(&state.coupons))
}

/// Endpoint: GET /coupons/:id
async fn get_coupon(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Coupon>, CouponsServiceError> {
    service::get_coupon(&state.coupons, id).map(Json)
}

/// Endpoint: PUT /coupons/:id
/// Replaces type and details, keeping the id.
async fn update_coupon(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<Json<Coupon>, CouponsServiceError> {
    service::update_coupon(&state.coupons, id, payload).map(Json)
}

/// Endpoint: DELETE /coupons/:id
async fn delete_coupon(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, CouponsServiceError> {
    service::delete_coupon(&state.coupons, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /applicable-coupons
/// Lists every coupon granting a positive discount on the submitted cart.
async fn applicable_coupons(
    State(state): State<SharedState>,
    Json(cart): Json<Cart>,
) -> Json<ApplicableCouponsResponse> {
    Json(service::list_applicable_coupons(&state.coupons, &cart))
}

/// Endpoint: POST /apply-coupon/:id
/// Returns the cart with the coupon's discount itemised. A missing or
/// unreadable body is a bad request, like a body without `items`.
async fn apply_coupon(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    body: Result<Json<Cart>, JsonRejection>,
) -> Result<Json<ApplyCouponResponse>, CouponsServiceError> {
    let cart = match body {
        Ok(Json(cart)) => Some(cart),
        Err(e) => {
            debug!("Cart parse error: {}", e.body_text());
            None
        }
    };

    service::apply_coupon(&state.coupons, id, cart).map(Json)
}
