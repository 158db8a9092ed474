//! Open-loop order generation and processing.
//!
//! Orders are generated, journaled, fulfilled and tallied strictly one at a
//! time: order `i + 1` is drawn only after order `i`'s outcome is recorded.
//! There are no retries; a rejected order is an ordinary outcome.

use rand::Rng;
use tracing::{info, trace};

use stocksim_core::{DomainError, DomainResult, OrderId, Sku};
use stocksim_inventory::{Inventory, Order};

use crate::journal::OrderJournal;
use crate::summary::OrderSummary;

const DEFAULT_PROGRESS_EVERY: u64 = 1_000_000;

/// Shape of a generated order stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStreamSpec {
    num_orders: u64,
    max_items_per_order: u32,
    progress_every: u64,
}

impl OrderStreamSpec {
    pub fn new(num_orders: u64, max_items_per_order: u32) -> DomainResult<Self> {
        if max_items_per_order == 0 {
            return Err(DomainError::validation(
                "max_items_per_order must be at least 1",
            ));
        }
        Ok(Self {
            num_orders,
            max_items_per_order,
            progress_every: DEFAULT_PROGRESS_EVERY,
        })
    }

    /// Log a progress line every `every` orders (0 disables).
    pub fn with_progress_every(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }

    pub fn num_orders(&self) -> u64 {
        self.num_orders
    }

    pub fn max_items_per_order(&self) -> u32 {
        self.max_items_per_order
    }
}

/// Generate `spec.num_orders()` orders, fulfill each against `inventory`, and
/// journal orders, outcomes and the final summary.
///
/// The first journal error aborts the stream and is returned as-is.
pub fn run_orders<R, J>(
    inventory: &mut Inventory,
    spec: &OrderStreamSpec,
    rng: &mut R,
    journal: &mut J,
) -> Result<OrderSummary, J::Error>
where
    R: Rng + ?Sized,
    J: OrderJournal + ?Sized,
{
    info!(
        num_orders = spec.num_orders,
        max_items_per_order = spec.max_items_per_order,
        "generating random orders"
    );

    let mut summary = OrderSummary::new();

    for index in 0..spec.num_orders {
        let order = next_order(inventory, index, spec.max_items_per_order, rng);
        journal.record_order(&order)?;

        let order = inventory.process_order(order);
        match order.reject_reason() {
            None => trace!(order_id = %order.order_id(), cost = %order.total_cost(), "order fulfilled"),
            Some(reason) => trace!(order_id = %order.order_id(), sku = %order.sku(), %reason, "order rejected"),
        }
        journal.record_result(&order)?;
        summary.record(&order);

        let processed = index + 1;
        if spec.progress_every > 0 && processed % spec.progress_every == 0 {
            info!(
                processed,
                success = summary.success_orders,
                failed = summary.failed_orders,
                "order progress"
            );
        }
    }

    journal.record_summary(&summary)?;
    Ok(summary)
}

/// Draw order `index`: a random catalog SKU (or a SKU that cannot exist when
/// the positional lookup misses) and a quantity in `1..=max_items_per_order`.
fn next_order<R: Rng + ?Sized>(
    inventory: &Inventory,
    index: u64,
    max_items_per_order: u32,
    rng: &mut R,
) -> Order {
    let pick = draw_below(inventory.len() as u64, rng) as usize;
    let sku = match inventory.get_item(pick) {
        Some(item) => item.sku().clone(),
        None => unknown_sku(draw_below(index, rng)),
    };
    let quantity = rng.gen_range(1..=max_items_per_order);

    Order::new(OrderId::from_index(index), sku, quantity)
}

/// Uniform in `[0, bound)`, or 0 when the range is empty.
fn draw_below<R: Rng + ?Sized>(bound: u64, rng: &mut R) -> u64 {
    if bound == 0 { 0 } else { rng.gen_range(0..bound) }
}

/// Catalog SKUs are two letters followed by digits; `O` plus six hex digits
/// never matches one.
fn unknown_sku(tag: u64) -> Sku {
    Sku::new(format!("O{tag:06X}"))
}
