//! Typed coupon rules
//!
//! Coupon records carry their configuration as an untyped document. This
//! module is the boundary where that document becomes one strongly-typed
//! [`CouponRule`] variant, selected by the record's [`CouponType`].

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::coupons::models::CouponType;

/// `CART_WISE` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartWiseRule {
    /// Cart total that must be strictly exceeded
    pub threshold: f64,

    /// Percentage taken off the whole cart
    pub discount: f64,
}

/// `PRODUCT_WISE` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWiseRule {
    /// Product whose lines are discounted
    #[serde(alias = "productId", deserialize_with = "whole_i64")]
    pub product_id: i64,

    /// Percentage taken off each matching line
    pub discount: f64,
}

/// A product and the number of units involved in one BxGy deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuantity {
    #[serde(alias = "productId", deserialize_with = "whole_i64")]
    pub product_id: i64,
    #[serde(deserialize_with = "whole_u32")]
    pub quantity: u32,
}

/// `BXGY` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BxGyRule {
    /// Products that must be bought; their quantities form a single set
    #[serde(alias = "buyProducts")]
    pub buy_products: Vec<ProductQuantity>,

    /// Products handed out for free, in priority order
    #[serde(alias = "getProducts")]
    pub get_products: Vec<ProductQuantity>,

    /// Maximum number of deals granted per cart
    #[serde(alias = "repetitionLimit", deserialize_with = "whole_u32")]
    pub repetition_limit: u32,
}

/// A coupon configuration interpreted according to its type
#[derive(Debug, Clone, PartialEq)]
pub enum CouponRule {
    CartWise(CartWiseRule),
    ProductWise(ProductWiseRule),
    BxGy(BxGyRule),
}

/// Coupon details that do not match the shape required by the coupon type
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid {coupon_type} details: {source}")]
    InvalidDetails {
        coupon_type: CouponType,
        #[source]
        source: serde_json::Error,
    },
}

impl CouponRule {
    /// Interprets `details` strictly according to `coupon_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDetails`] when a required field
    /// is missing or holds a value of the wrong kind (e.g. a negative
    /// quantity).
    pub fn parse(coupon_type: CouponType, details: &Value) -> Result<Self, ConfigurationError> {
        let rule = match coupon_type {
            CouponType::CartWise => CartWiseRule::deserialize(details).map(Self::CartWise),
            CouponType::ProductWise => ProductWiseRule::deserialize(details).map(Self::ProductWise),
            CouponType::BxGy => BxGyRule::deserialize(details).map(Self::BxGy),
        };

        rule.map_err(|source| ConfigurationError::InvalidDetails {
            coupon_type,
            source,
        })
    }
}

// Identifiers and counts may arrive in float form (`2.0`); any JSON number is
// accepted and truncated toward zero.

fn whole_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value.trunc().abs() < i64::MAX as f64 => {
            Ok(value.trunc() as i64)
        }
        _ => Err(de::Error::custom(format!("{number} is not a valid identifier"))),
    }
}

fn whole_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_u64() {
        return u32::try_from(value)
            .map_err(|_| de::Error::custom(format!("{number} is out of range")));
    }

    match number.as_f64() {
        Some(value) if value >= 0.0 && value < f64::from(u32::MAX) + 1.0 => {
            Ok(value.trunc() as u32)
        }
        _ => Err(de::Error::custom(format!(
            "{number} is not a non-negative count"
        ))),
    }
}
