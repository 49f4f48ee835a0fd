//! Percentage off the whole cart once its total exceeds a threshold.

use super::{rules::CartWiseRule, Evaluation};
use crate::cart::{helpers::cart_total, CartItem};

/// The comparison against the threshold is strict: a cart totalling exactly
/// the threshold gets nothing. Each line carries its proportional share of
/// `total × pct / 100`; the last priced line absorbs the rounding remainder
/// so the shares add up to the cart-level discount.
pub(super) fn evaluate(rule: &CartWiseRule, items: &[CartItem]) -> Evaluation {
    let total = cart_total(items);
    if total <= rule.threshold {
        return Evaluation::none(items.len());
    }

    let discount = total * rule.discount / 100.0;
    let mut line_discounts: Vec<f64> = items
        .iter()
        .map(|i| i.line_total() * rule.discount / 100.0)
        .collect();

    if let Some(last) = items.iter().rposition(|i| i.line_total() != 0.0) {
        let others: f64 = line_discounts
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != last)
            .map(|(_, share)| share)
            .sum();
        if let Some(share) = line_discounts.get_mut(last) {
            *share = discount - others;
        }
    }

    // Report exactly what the lines add up to.
    Evaluation::from_lines(line_discounts)
}
