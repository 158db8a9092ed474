//! Record sink abstraction for the order stream.
//!
//! The generator reports three kinds of records, in this order:
//! - every raw order as generated (`record_order`),
//! - every fulfillment outcome (`record_result`),
//! - one summary after the last order (`record_summary`).
//!
//! Implementations decide the storage format. A failing sink aborts the run;
//! there is no partial-result recovery.

use core::convert::Infallible;

use stocksim_inventory::Order;

use crate::summary::OrderSummary;

pub trait OrderJournal {
    type Error;

    fn record_order(&mut self, order: &Order) -> Result<(), Self::Error>;

    fn record_result(&mut self, order: &Order) -> Result<(), Self::Error>;

    fn record_summary(&mut self, summary: &OrderSummary) -> Result<(), Self::Error>;
}

/// In-memory journal for tests/dev. Keeps every record.
#[derive(Debug, Default, Clone)]
pub struct MemoryJournal {
    pub orders: Vec<Order>,
    pub results: Vec<Order>,
    pub summary: Option<OrderSummary>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderJournal for MemoryJournal {
    type Error = Infallible;

    fn record_order(&mut self, order: &Order) -> Result<(), Self::Error> {
        self.orders.push(order.clone());
        Ok(())
    }

    fn record_result(&mut self, order: &Order) -> Result<(), Self::Error> {
        self.results.push(order.clone());
        Ok(())
    }

    fn record_summary(&mut self, summary: &OrderSummary) -> Result<(), Self::Error> {
        self.summary = Some(*summary);
        Ok(())
    }
}
