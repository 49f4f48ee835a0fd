//! Percentage off every line of one product.

use super::{rules::ProductWiseRule, Evaluation};
use crate::cart::CartItem;

pub(super) fn evaluate(rule: &ProductWiseRule, items: &[CartItem]) -> Evaluation {
    Evaluation::from_lines(
        items
            .iter()
            .map(|i| {
                if i.product_id == rule.product_id {
                    i.line_total() * rule.discount / 100.0
                } else {
                    0.0
                }
            })
            .collect(),
    )
}
