//! Shopping Cart Domain Module
//!
//! This module contains the cart value types and arithmetic shared by the
//! discount engine and the coupon service:
//! - Domain models (CartItem, Cart, UpdatedCart)
//! - Helpers (totals, discount reset, cart reconstruction, formatting)

pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use models::{Cart, CartItem, UpdatedCart};
