//! Buy X, get Y free.
//!
//! A deal is one complete purchase of the buy set: the configured buy
//! quantities are summed into a single requirement and matched against the
//! cart quantities of every buy product. Each deal grants the summed get
//! quantities as free units, up to `repetition_limit` deals.
//!
//! Free units are handed out in a fixed order: get products in configured
//! order, and for each product the matching cart lines in cart order. A line
//! never receives more free units than it holds.

use super::{rules::BxGyRule, Evaluation};
use crate::cart::CartItem;

/// Number of complete deals the cart qualifies for.
///
/// A buy set requiring zero units is a configuration error and yields no
/// deals rather than dividing by zero.
pub fn deals_applicable(rule: &BxGyRule, items: &[CartItem]) -> u64 {
    let needed: u64 = rule
        .buy_products
        .iter()
        .map(|p| u64::from(p.quantity))
        .sum();
    if needed == 0 {
        return 0;
    }

    // Lines are counted once per buy entry they match.
    let in_cart: u64 = rule
        .buy_products
        .iter()
        .map(|p| quantity_of(items, p.product_id))
        .sum();

    (in_cart / needed).min(u64::from(rule.repetition_limit))
}

/// Free units granted on each line, in cart order.
pub fn free_units(rule: &BxGyRule, items: &[CartItem]) -> Vec<u64> {
    let mut granted = vec![0u64; items.len()];

    let deals = deals_applicable(rule, items);
    if deals == 0 {
        return granted;
    }

    let per_deal: u64 = rule
        .get_products
        .iter()
        .map(|p| u64::from(p.quantity))
        .sum();
    let mut remaining = deals.saturating_mul(per_deal);

    'products: for product in &rule.get_products {
        for (item, free) in items.iter().zip(granted.iter_mut()) {
            if remaining == 0 {
                break 'products;
            }
            if item.product_id != product.product_id {
                continue;
            }

            let available = u64::from(item.quantity).saturating_sub(*free);
            let units = remaining.min(available);
            *free += units;
            remaining -= units;
        }
    }

    granted
}

pub(super) fn evaluate(rule: &BxGyRule, items: &[CartItem]) -> Evaluation {
    let granted = free_units(rule, items);

    Evaluation::from_lines(
        items
            .iter()
            .zip(granted)
            .map(|(item, free)| free as f64 * item.price)
            .collect(),
    )
}

fn quantity_of(items: &[CartItem], product_id: i64) -> u64 {
    items
        .iter()
        .filter(|i| i.product_id == product_id)
        .map(|i| u64::from(i.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::rules::ProductQuantity;

    fn pq(product_id: i64, quantity: u32) -> ProductQuantity {
        ProductQuantity {
            product_id,
            quantity,
        }
    }

    fn rule(
        buy: Vec<ProductQuantity>,
        get: Vec<ProductQuantity>,
        repetition_limit: u32,
    ) -> BxGyRule {
        BxGyRule {
            buy_products: buy,
            get_products: get,
            repetition_limit,
        }
    }

    #[test]
    fn test_same_product_buy_two_get_one() {
        let items = vec![CartItem::new(1, 6, 10.0)];
        let rule = rule(vec![pq(1, 2)], vec![pq(1, 1)], 2);

        assert_eq!(deals_applicable(&rule, &items), 2);

        let evaluation = evaluate(&rule, &items);
        assert_eq!(evaluation.discount, 20.0);
        assert_eq!(evaluation.line_discounts, vec![20.0]);
    }

    #[test]
    fn test_repetition_limit_caps_deals() {
        let items = vec![CartItem::new(1, 100, 1.0), CartItem::new(2, 100, 5.0)];
        let rule = rule(vec![pq(1, 1)], vec![pq(2, 1)], 3);

        assert_eq!(deals_applicable(&rule, &items), 3);
        assert_eq!(free_units(&rule, &items), vec![0, 3]);
        assert_eq!(evaluate(&rule, &items).discount, 15.0);
    }

    #[test]
    fn test_buy_set_sums_across_products() {
        // Needs 3 units from {1, 2}; cart has 2 + 2 = 4, so one deal.
        let items = vec![
            CartItem::new(1, 2, 10.0),
            CartItem::new(2, 2, 10.0),
            CartItem::new(3, 5, 7.0),
        ];
        let rule = rule(vec![pq(1, 2), pq(2, 1)], vec![pq(3, 2)], 5);

        assert_eq!(deals_applicable(&rule, &items), 1);
        assert_eq!(free_units(&rule, &items), vec![0, 0, 2]);
        assert_eq!(evaluate(&rule, &items).discount, 14.0);
    }

    #[test]
    fn test_not_enough_to_buy() {
        let items = vec![CartItem::new(1, 1, 10.0), CartItem::new(2, 4, 3.0)];
        let rule = rule(vec![pq(1, 2)], vec![pq(2, 1)], 1);

        let evaluation = evaluate(&rule, &items);

        assert_eq!(evaluation.discount, 0.0);
        assert_eq!(evaluation.line_discounts, vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_buy_quantity_yields_no_deals() {
        let items = vec![CartItem::new(1, 10, 10.0)];
        let rule = rule(vec![pq(1, 0)], vec![pq(1, 1)], 5);

        assert_eq!(deals_applicable(&rule, &items), 0);
        assert_eq!(evaluate(&rule, &items).discount, 0.0);

        let empty_buy = BxGyRule {
            buy_products: vec![],
            ..rule
        };
        assert_eq!(deals_applicable(&empty_buy, &items), 0);
    }

    #[test]
    fn test_zero_repetition_limit() {
        let items = vec![CartItem::new(1, 10, 10.0)];
        let rule = rule(vec![pq(1, 1)], vec![pq(1, 1)], 0);

        assert_eq!(evaluate(&rule, &items).discount, 0.0);
    }

    #[test]
    fn test_free_units_follow_cart_order_within_product() {
        // Two lines of product 2 at different prices; the earlier line wins.
        let items = vec![
            CartItem::new(1, 2, 10.0),
            CartItem::new(2, 1, 8.0),
            CartItem::new(2, 5, 3.0),
        ];
        let rule = rule(vec![pq(1, 1)], vec![pq(2, 1)], 2);

        assert_eq!(free_units(&rule, &items), vec![0, 1, 1]);

        let evaluation = evaluate(&rule, &items);
        assert_eq!(evaluation.line_discounts, vec![0.0, 8.0, 3.0]);
        assert_eq!(evaluation.discount, 11.0);
    }

    #[test]
    fn test_free_units_follow_configured_get_order() {
        // Budget of 2 free units: product 3 is listed first and takes both.
        let items = vec![
            CartItem::new(1, 2, 10.0),
            CartItem::new(2, 4, 50.0),
            CartItem::new(3, 4, 1.0),
        ];
        let rule = rule(vec![pq(1, 2)], vec![pq(3, 1), pq(2, 1)], 1);

        assert_eq!(free_units(&rule, &items), vec![0, 0, 2]);
        assert_eq!(evaluate(&rule, &items).discount, 2.0);
    }

    #[test]
    fn test_budget_spills_to_next_get_product() {
        let items = vec![
            CartItem::new(1, 3, 10.0),
            CartItem::new(2, 4, 50.0),
            CartItem::new(3, 1, 1.0),
        ];
        // 3 deals × 2 free units = 6; product 3 only has 1 unit.
        let rule = rule(vec![pq(1, 1)], vec![pq(3, 1), pq(2, 1)], 3);

        assert_eq!(free_units(&rule, &items), vec![0, 4, 1]);
        assert_eq!(evaluate(&rule, &items).discount, 201.0);
    }

    #[test]
    fn test_repeated_get_product_never_exceeds_line_quantity() {
        let items = vec![CartItem::new(1, 10, 1.0), CartItem::new(2, 2, 5.0)];
        let rule = rule(vec![pq(1, 1)], vec![pq(2, 1), pq(2, 1)], 5);

        assert_eq!(free_units(&rule, &items), vec![0, 2]);
        assert_eq!(evaluate(&rule, &items).discount, 10.0);
    }

    #[test]
    fn test_product_in_both_buy_and_get_is_counted_for_each() {
        let items = vec![CartItem::new(1, 4, 10.0)];
        let rule = rule(vec![pq(1, 2)], vec![pq(1, 2)], 10);

        // All four units count toward buying, and all four are eligible to be free.
        assert_eq!(deals_applicable(&rule, &items), 2);
        assert_eq!(free_units(&rule, &items), vec![4]);
    }

    #[test]
    fn test_get_product_missing_from_cart() {
        let items = vec![CartItem::new(1, 4, 10.0)];
        let rule = rule(vec![pq(1, 2)], vec![pq(9, 1)], 2);

        assert_eq!(deals_applicable(&rule, &items), 2);
        assert_eq!(evaluate(&rule, &items).discount, 0.0);
    }
}
