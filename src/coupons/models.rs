//! Coupon Domain Models
//!
//! This module contains the stored coupon record and the request/response
//! payloads of the coupon API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::cart::UpdatedCart;

// =============================================================================
// Coupon Records
// =============================================================================

/// Kind of coupon, selecting how its details are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponType {
    #[serde(rename = "CART_WISE")]
    CartWise,

    #[serde(rename = "PRODUCT_WISE")]
    ProductWise,

    #[serde(rename = "BXGY")]
    BxGy,
}

impl CouponType {
    /// Wire name of the coupon type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CartWise => "CART_WISE",
            Self::ProductWise => "PRODUCT_WISE",
            Self::BxGy => "BXGY",
        }
    }
}

impl fmt::Display for CouponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored coupon
///
/// `details` is kept as an opaque document; only the discount engine
/// interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Generated identifier
    pub id: u64,

    /// Coupon kind
    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    /// Type-specific configuration
    pub details: Value,
}

// =============================================================================
// API Payloads
// =============================================================================

/// Body of coupon create and update requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCouponRequest {
    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    #[serde(default)]
    pub details: Value,
}

/// A coupon that grants a discount on the submitted cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableCoupon {
    pub coupon_id: u64,

    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    pub discount: f64,
}

/// Response for `POST /applicable-coupons`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableCouponsResponse {
    pub applicable_coupons: Vec<ApplicableCoupon>,
}

/// Response for `POST /apply-coupon/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCouponResponse {
    pub updated_cart: UpdatedCart,
}

/// Error body returned with 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
