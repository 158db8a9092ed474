use serde::{Deserialize, Serialize};

use stocksim_core::Money;
use stocksim_inventory::Order;

/// Aggregate outcome of an order stream.
///
/// Invariant: `success_orders + failed_orders == total_orders`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_revenue: Money,
    pub total_orders: u64,
    pub success_orders: u64,
    pub failed_orders: u64,
}

impl OrderSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one processed order.
    pub fn record(&mut self, order: &Order) {
        self.total_orders += 1;
        if order.is_successful() {
            self.success_orders += 1;
            self.total_revenue += order.total_cost();
        } else {
            self.failed_orders += 1;
        }
    }

    /// Fraction of orders fulfilled, `0.0` for an empty stream.
    pub fn success_rate(&self) -> f64 {
        if self.total_orders == 0 {
            return 0.0;
        }
        self.success_orders as f64 / self.total_orders as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksim_core::{OrderId, Sku};
    use stocksim_inventory::{Inventory, Item};

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = OrderSummary::new();
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.success_orders, 0);
        assert_eq!(summary.failed_orders, 0);
        assert_eq!(summary.total_revenue, Money::ZERO);
        assert_eq!(summary.success_rate(), 0.0);
    }

    #[test]
    fn records_revenue_only_for_fulfilled_orders() {
        let mut inventory = Inventory::new();
        inventory
            .add_item(Item::new(Sku::from("AA0000"), "Item 000000", Money::new(2, 49), 4))
            .unwrap();

        let mut summary = OrderSummary::new();
        for (n, qty) in [3u32, 3, 1].into_iter().enumerate() {
            let order = Order::new(OrderId::from_index(n as u64), Sku::from("AA0000"), qty);
            summary.record(&inventory.process_order(order));
        }

        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.success_orders, 2);
        assert_eq!(summary.failed_orders, 1);
        assert_eq!(summary.total_revenue, Money::new(2, 49).times(4));
    }

    #[test]
    fn serializes_with_record_field_names() {
        let summary = OrderSummary {
            total_revenue: Money::new(10, 98),
            total_orders: 3,
            success_orders: 2,
            failed_orders: 1,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "total_revenue": 10.98,
                "total_orders": 3,
                "success_orders": 2,
                "failed_orders": 1,
            })
        );
    }
}
