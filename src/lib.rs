//! Coupon Engine Library
//!
//! This library provides coupon management for an e-commerce cart and the
//! discount engine that evaluates cart-wise, product-wise and buy-x-get-y
//! coupons against a cart.

// Domain modules
pub mod cart;
pub mod coupons;
pub mod discount;

// Infrastructure
pub mod config;
pub mod healthcheck;
pub mod observability;
pub mod router;
pub mod shutdown;
