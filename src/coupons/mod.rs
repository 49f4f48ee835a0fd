//! Coupon Domain Module
//!
//! This module contains everything around stored coupons, including:
//! - Domain models (Coupon, CouponType, request and response payloads)
//! - The in-memory coupon store and application state
//! - Service operations orchestrating the store and the discount engine
//! - REST API handlers

pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod state;

// Re-export commonly used types for convenience
pub use errors::CouponsServiceError;
pub use handlers::routes;
pub use models::{Coupon, CouponType};
pub use state::{AppState, CouponStore, SharedState};
