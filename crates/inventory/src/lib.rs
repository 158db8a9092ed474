//! Inventory domain module.
//!
//! This crate contains the item catalog, the order record, and the stock
//! fulfillment rules, implemented as deterministic domain logic (no IO).
//! Randomness is always supplied by the caller.

pub mod catalog;
pub mod item;
pub mod order;
pub mod store;

pub use catalog::{CatalogSpec, category_codes, generate_catalog};
pub use item::Item;
pub use order::{Order, OrderStatus, RejectReason};
pub use store::{FulfillOrder, Inventory, InventoryCommand, InventoryEvent, OrderRejected, StockDecremented};
