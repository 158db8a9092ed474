//! Order stream module.
//!
//! Generates synthetic orders against an [`Inventory`], fulfills each one in
//! turn, hands every order and outcome to an [`OrderJournal`], and tallies an
//! [`OrderSummary`].
//!
//! [`Inventory`]: stocksim_inventory::Inventory

pub mod generator;
pub mod journal;
pub mod summary;

pub use generator::{OrderStreamSpec, run_orders};
pub use journal::{MemoryJournal, OrderJournal};
pub use summary::OrderSummary;
