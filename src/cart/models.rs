//! Shopping Cart Domain Models
//!
//! This module contains the cart value types exchanged with the discount
//! engine. A cart lives for a single request and carries no identity.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A single line of the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier (several lines may share a product)
    pub product_id: i64,

    /// Number of units on this line
    pub quantity: u32,

    /// Unit price
    pub price: f64,

    /// Discount attributed to this line, zero on input
    #[serde(default)]
    pub total_discount: f64,
}

impl CartItem {
    /// Creates a line with no discount attributed to it
    pub fn new(product_id: i64, quantity: u32, price: f64) -> Self {
        Self {
            product_id,
            quantity,
            price,
            total_discount: 0.0,
        }
    }

    /// Undiscounted value of the line (`price × quantity`)
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Inbound cart payload
///
/// `items` stays optional so that handlers can tell an absent list apart
/// from an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart lines in the order supplied by the caller
    pub items: Option<Vec<CartItem>>,
}

impl Cart {
    /// Builds a cart from a list of lines
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items: Some(items) }
    }
}

/// Cart after a coupon has been applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCart {
    /// Input lines, in input order, with `total_discount` populated
    pub items: Vec<CartItem>,

    /// Sum of `price × quantity` over every line
    pub total_price: f64,

    /// Discount granted by the coupon
    pub total_discount: f64,

    /// `total_price - total_discount`
    pub final_price: f64,
}
