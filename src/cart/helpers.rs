//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart arithmetic and formatting.

use super::models::{CartItem, UpdatedCart};

/// Sum of `price × quantity` over all lines.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Copies `items` with every line's `total_discount` reset to zero.
pub fn reset_discounts(items: &[CartItem]) -> Vec<CartItem> {
    items
        .iter()
        .map(|i| CartItem::new(i.product_id, i.quantity, i.price))
        .collect()
}

/// Rebuilds the cart around a computed discount.
///
/// # Behaviour
///
/// * Every input line is copied in order with `total_discount` reset, then
///   overwritten by the matching entry of `line_discounts` (missing entries
///   count as zero).
/// * `total_discount` is taken as given rather than re-summed, so callers
///   control exactly which scalar the cart reports.
pub fn build_updated_cart(
    items: &[CartItem],
    line_discounts: &[f64],
    total_discount: f64,
) -> UpdatedCart {
    let mut updated = reset_discounts(items);
    for (item, discount) in updated.iter_mut().zip(line_discounts) {
        item.total_discount = *discount;
    }

    let total_price = cart_total(items);

    UpdatedCart {
        items: updated,
        total_price,
        total_discount,
        final_price: total_price - total_discount,
    }
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x #1 @ 100, 1x #7 @ 5.5"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x #{} @ {}", i.quantity, i.product_id, i.price))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_updated_cart_preserves_order_and_prices() {
        let mut discounted = CartItem::new(3, 1, 40.0);
        discounted.total_discount = 12.0;
        let items = vec![CartItem::new(1, 2, 100.0), discounted];

        let updated = build_updated_cart(&items, &[0.0, 10.0], 10.0);

        assert_eq!(updated.items.len(), 2);
        assert_eq!(updated.items[0].product_id, 1);
        assert_eq!(updated.items[0].total_discount, 0.0);
        assert_eq!(updated.items[1].product_id, 3);
        assert_eq!(updated.items[1].total_discount, 10.0);
        assert_eq!(updated.total_price, 240.0);
        assert_eq!(updated.total_discount, 10.0);
        assert_eq!(updated.final_price, 230.0);
    }

    #[test]
    fn test_reset_discounts_clears_inbound_values() {
        let mut item = CartItem::new(9, 4, 2.5);
        item.total_discount = 3.0;

        let reset = reset_discounts(&[item]);

        assert_eq!(reset[0].total_discount, 0.0);
        assert_eq!(reset[0].quantity, 4);
    }

    #[test]
    fn test_format_item_summary() {
        let items = vec![CartItem::new(1, 2, 100.0), CartItem::new(7, 1, 5.5)];
        assert_eq!(format_item_summary(&items), "2x #1 @ 100, 1x #7 @ 5.5");
    }
}
