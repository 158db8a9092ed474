//! Inventory store: one arena of items, two views over it.
//!
//! Items live in a single arena (`Vec<Item>`, creation order). The positional
//! view is a list of arena slots that can be shuffled; the key view maps each
//! SKU to its arena slot. Both views resolve to the same slot, so a quantity
//! change made through either is visible through the other.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use stocksim_core::{Aggregate, DomainError, DomainResult, Entity, Money, Sku};

use crate::item::Item;
use crate::order::{Order, RejectReason};

/// Command: FulfillOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillOrder {
    pub sku: Sku,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    FulfillOrder(FulfillOrder),
}

/// Event: StockDecremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDecremented {
    pub sku: Sku,
    pub quantity: u32,
    pub unit_price: Money,
}

/// Event: OrderRejected. Carries no state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRejected {
    pub sku: Sku,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    StockDecremented(StockDecremented),
    OrderRejected(OrderRejected),
}

/// The inventory store.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    positions: Vec<usize>,
    by_sku: HashMap<Sku, usize>,
    version: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            by_sku: HashMap::with_capacity(capacity),
            version: 0,
        }
    }

    /// Append an item to both views. SKUs must be unique.
    pub fn add_item(&mut self, item: Item) -> DomainResult<()> {
        let sku = item.id().clone();
        if self.by_sku.contains_key(&sku) {
            return Err(DomainError::conflict(format!("sku {sku} already exists")));
        }

        let slot = self.items.len();
        self.by_sku.insert(sku, slot);
        self.positions.push(slot);
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positional lookup; `None` when `index` is out of range.
    pub fn get_item(&self, index: usize) -> Option<&Item> {
        self.positions.get(index).map(|&slot| &self.items[slot])
    }

    /// Key lookup; a missing SKU is `None`, never an error.
    pub fn get_by_sku(&self, sku: &str) -> Option<&Item> {
        self.by_sku.get(sku).map(|&slot| &self.items[slot])
    }

    /// Items in current positional order, reflecting all fulfilled orders so far.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> + '_ {
        self.positions.iter().map(|&slot| &self.items[slot])
    }

    /// Randomly permute the positional view. The key view is unaffected.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.positions.shuffle(rng);
    }

    /// Total units on hand across all items.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Value of all stock on hand at current prices.
    pub fn stock_value(&self) -> Money {
        self.items.iter().map(Item::stock_value).sum()
    }

    /// Fulfill `order` against current stock and return it annotated.
    ///
    /// The order is first reset to pending with zero cost. If the SKU exists
    /// and holds at least `order.quantity()` units, stock is decremented and the
    /// order is marked fulfilled with `total_cost = price * quantity`; otherwise
    /// it is rejected and nothing changes.
    pub fn process_order(&mut self, mut order: Order) -> Order {
        order.reset();

        let command = InventoryCommand::FulfillOrder(FulfillOrder {
            sku: order.sku().clone(),
            quantity: order.quantity(),
        });
        let Ok(events) = self.handle(&command);

        for event in &events {
            self.apply(event);
            match event {
                InventoryEvent::StockDecremented(e) => {
                    order.fulfill(e.unit_price.times(e.quantity));
                }
                InventoryEvent::OrderRejected(e) => {
                    order.reject(e.reason);
                }
            }
        }

        order
    }

    fn handle_fulfill(&self, cmd: &FulfillOrder) -> Vec<InventoryEvent> {
        let Some(item) = self.get_by_sku(cmd.sku.as_str()) else {
            return vec![InventoryEvent::OrderRejected(OrderRejected {
                sku: cmd.sku.clone(),
                reason: RejectReason::UnknownSku,
            })];
        };

        if item.quantity() < cmd.quantity {
            return vec![InventoryEvent::OrderRejected(OrderRejected {
                sku: cmd.sku.clone(),
                reason: RejectReason::InsufficientStock {
                    available: item.quantity(),
                },
            })];
        }

        vec![InventoryEvent::StockDecremented(StockDecremented {
            sku: cmd.sku.clone(),
            quantity: cmd.quantity,
            unit_price: item.price(),
        })]
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = core::convert::Infallible;

    fn version(&self) -> u64 {
        self.version
    }

    /// A `StockDecremented` for an unknown SKU, or for more units than the
    /// item holds, leaves the store (and its version) unchanged.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::StockDecremented(e) => {
                let Some(&slot) = self.by_sku.get(&e.sku) else {
                    return;
                };
                if self.items[slot].decrement(e.quantity).is_ok() {
                    self.version += 1;
                }
            }
            InventoryEvent::OrderRejected(_) => {}
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::FulfillOrder(cmd) => Ok(self.handle_fulfill(cmd)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use stocksim_core::OrderId;

    use crate::order::OrderStatus;

    fn test_item(sku: &str, price: Money, quantity: u32) -> Item {
        Item::new(Sku::from(sku), format!("Item {sku}"), price, quantity)
    }

    fn four_item_store() -> Inventory {
        let mut inventory = Inventory::new();
        for sku in ["AA0000", "AB0000", "AA0001", "AB0001"] {
            inventory
                .add_item(test_item(sku, Money::new(4, 49), 5))
                .unwrap();
        }
        inventory
    }

    fn order(n: u64, sku: &str, quantity: u32) -> Order {
        Order::new(OrderId::from_index(n), Sku::from(sku), quantity)
    }

    #[test]
    fn fulfilled_then_rejected_when_stock_runs_out() {
        let mut inventory = four_item_store();
        let sku = inventory.get_item(1).unwrap().sku().clone();
        let price = inventory.get_item(1).unwrap().price();

        let first = inventory.process_order(order(0, sku.as_str(), 3));
        assert!(first.is_successful());
        assert_eq!(first.total_cost(), price.times(3));
        assert_eq!(inventory.get_by_sku(sku.as_str()).unwrap().quantity(), 2);

        let second = inventory.process_order(order(1, sku.as_str(), 3));
        assert!(!second.is_successful());
        assert_eq!(second.total_cost(), Money::ZERO);
        assert_eq!(
            second.status(),
            OrderStatus::Rejected(RejectReason::InsufficientStock { available: 2 })
        );
        assert_eq!(inventory.get_by_sku(sku.as_str()).unwrap().quantity(), 2);
        assert_eq!(inventory.version(), 1);
    }

    #[test]
    fn unknown_sku_is_rejected_without_mutation() {
        let mut inventory = four_item_store();
        let before: Vec<u32> = inventory.items().map(Item::quantity).collect();

        let result = inventory.process_order(order(0, "O00001F", 1));

        assert!(!result.is_successful());
        assert_eq!(result.total_cost(), Money::ZERO);
        assert_eq!(result.reject_reason(), Some(RejectReason::UnknownSku));
        let after: Vec<u32> = inventory.items().map(Item::quantity).collect();
        assert_eq!(before, after);
        assert_eq!(inventory.version(), 0);
    }

    #[test]
    fn exact_remaining_quantity_can_be_taken() {
        let mut inventory = four_item_store();
        let result = inventory.process_order(order(0, "AB0001", 5));
        assert!(result.is_successful());
        assert_eq!(inventory.get_by_sku("AB0001").unwrap().quantity(), 0);
    }

    #[test]
    fn reprocessing_resets_previous_outcome() {
        let mut inventory = four_item_store();
        let done = inventory.process_order(order(0, "AA0000", 5));
        assert!(done.is_successful());

        let again = inventory.process_order(done);
        assert!(!again.is_successful());
        assert_eq!(again.total_cost(), Money::ZERO);
    }

    #[test]
    fn both_views_observe_the_same_item_after_shuffle() {
        let mut inventory = four_item_store();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        inventory.shuffle(&mut rng);

        inventory.process_order(order(0, "AB0000", 4));

        let positional = inventory
            .items()
            .find(|item| item.sku().as_str() == "AB0000")
            .unwrap();
        assert_eq!(positional.quantity(), 1);
        assert_eq!(inventory.get_by_sku("AB0000").unwrap().quantity(), 1);
    }

    #[test]
    fn shuffle_keeps_the_same_item_set() {
        let mut inventory = four_item_store();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        inventory.shuffle(&mut rng);

        let mut skus: Vec<&str> = inventory.items().map(|i| i.sku().as_str()).collect();
        skus.sort_unstable();
        assert_eq!(skus, vec!["AA0000", "AA0001", "AB0000", "AB0001"]);
    }

    #[test]
    fn get_item_out_of_range_is_none() {
        let inventory = four_item_store();
        assert!(inventory.get_item(3).is_some());
        assert!(inventory.get_item(4).is_none());
        assert!(Inventory::new().get_item(0).is_none());
    }

    #[test]
    fn duplicate_sku_is_a_conflict() {
        let mut inventory = four_item_store();
        let err = inventory
            .add_item(test_item("AA0000", Money::new(1, 99), 10))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn oversized_decrement_event_is_ignored() {
        let mut inventory = four_item_store();
        inventory.apply(&InventoryEvent::StockDecremented(StockDecremented {
            sku: Sku::from("AA0001"),
            quantity: 6,
            unit_price: Money::new(4, 49),
        }));
        assert_eq!(inventory.get_by_sku("AA0001").unwrap().quantity(), 5);
        assert_eq!(inventory.version(), 0);

        inventory.apply(&InventoryEvent::StockDecremented(StockDecremented {
            sku: Sku::from("ZZ9999"),
            quantity: 1,
            unit_price: Money::new(4, 49),
        }));
        assert_eq!(inventory.version(), 0);
        assert_eq!(inventory.total_units(), 20);
    }

    #[test]
    fn stock_totals_track_fulfillment() {
        let mut inventory = four_item_store();
        assert_eq!(inventory.total_units(), 20);
        assert_eq!(inventory.stock_value(), Money::new(4, 49).times(20));

        inventory.process_order(order(0, "AA0001", 2));
        assert_eq!(inventory.total_units(), 18);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: fulfilled orders cost price * quantity and remove exactly
            /// that many units; rejected orders leave the item untouched.
            #[test]
            fn fulfillment_conserves_stock(
                stock in prop::collection::vec(0u32..50, 1..8),
                requests in prop::collection::vec((0usize..10, 1u32..20), 0..40),
            ) {
                let mut inventory = Inventory::new();
                for (i, qty) in stock.iter().enumerate() {
                    inventory
                        .add_item(test_item(&format!("AA{i:04}"), Money::new(2, 19), *qty))
                        .unwrap();
                }

                for (n, (index, quantity)) in requests.into_iter().enumerate() {
                    let sku = format!("AA{index:04}");
                    let before = inventory.get_by_sku(&sku).map(Item::quantity);
                    let result = inventory.process_order(order(n as u64, &sku, quantity));
                    let after = inventory.get_by_sku(&sku).map(Item::quantity);

                    if result.is_successful() {
                        prop_assert_eq!(result.total_cost(), Money::new(2, 19).times(quantity));
                        prop_assert_eq!(after, before.map(|q| q - quantity));
                    } else {
                        prop_assert_eq!(result.total_cost(), Money::ZERO);
                        prop_assert_eq!(after, before);
                    }
                }
            }
        }
    }
}
