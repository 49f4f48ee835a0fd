//! Discount Engine
//!
//! Pure evaluation of a coupon against a cart. Every rule produces a single
//! [`Evaluation`] holding both the scalar discount and the per-line
//! breakdown, so [`compute_discount`] and [`apply_discount`] always agree.
//!
//! A coupon whose details cannot be interpreted for its type never fails the
//! caller: it is logged and treated as granting no discount.

pub mod bxgy;
pub mod cart_wise;
pub mod product_wise;
pub mod rules;

use tracing::warn;

use crate::cart::{helpers::build_updated_cart, CartItem, UpdatedCart};
use crate::coupons::models::Coupon;

pub use rules::{
    BxGyRule, CartWiseRule, ConfigurationError, CouponRule, ProductQuantity, ProductWiseRule,
};

/// Outcome of evaluating one rule against one cart
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Total discount granted
    pub discount: f64,

    /// Discount attributed to each cart line, in cart order
    pub line_discounts: Vec<f64>,
}

impl Evaluation {
    /// No discount on any of `lines` cart lines
    pub fn none(lines: usize) -> Self {
        Self {
            discount: 0.0,
            line_discounts: vec![0.0; lines],
        }
    }

    /// Discount made up exactly of the given line discounts
    pub fn from_lines(line_discounts: Vec<f64>) -> Self {
        Self {
            discount: line_discounts.iter().fold(0.0, |acc, d| acc + d),
            line_discounts,
        }
    }
}

impl CouponRule {
    /// Evaluates the rule against `items`.
    pub fn evaluate(&self, items: &[CartItem]) -> Evaluation {
        match self {
            Self::CartWise(rule) => cart_wise::evaluate(rule, items),
            Self::ProductWise(rule) => product_wise::evaluate(rule, items),
            Self::BxGy(rule) => bxgy::evaluate(rule, items),
        }
    }
}

/// Discount `coupon` grants on `items`, or zero if it does not apply.
pub fn compute_discount(coupon: &Coupon, items: &[CartItem]) -> f64 {
    evaluate_coupon(coupon, items).discount
}

/// Copy of `items` with `coupon` applied.
///
/// The reported `total_discount` is the value [`compute_discount`] returns
/// for the same input.
pub fn apply_discount(coupon: &Coupon, items: &[CartItem]) -> UpdatedCart {
    let evaluation = evaluate_coupon(coupon, items);
    build_updated_cart(items, &evaluation.line_discounts, evaluation.discount)
}

fn evaluate_coupon(coupon: &Coupon, items: &[CartItem]) -> Evaluation {
    match CouponRule::parse(coupon.coupon_type, &coupon.details) {
        Ok(rule) => rule.evaluate(items),
        Err(error) => {
            warn!(coupon_id = coupon.id, %error, "ignoring misconfigured coupon");
            Evaluation::none(items.len())
        }
    }
}
