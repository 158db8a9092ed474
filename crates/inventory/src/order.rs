use serde::{Deserialize, Serialize};

use stocksim_core::{Entity, Money, OrderId, Sku};

/// Why an order could not be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No item with the requested SKU exists.
    UnknownSku,
    /// The item exists but holds fewer units than requested.
    InsufficientStock { available: u32 },
}

impl core::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectReason::UnknownSku => f.write_str("unknown sku"),
            RejectReason::InsufficientStock { available } => {
                write!(f, "insufficient stock ({available} available)")
            }
        }
    }
}

/// Order lifecycle: `Pending -> Fulfilled | Rejected` (both terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Fulfilled,
    Rejected(RejectReason),
}

/// A single-line purchase order against the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    sku: Sku,
    quantity: u32,
    status: OrderStatus,
    total_cost: Money,
}

impl Order {
    /// A new, pending order. `total_cost` stays zero until fulfilled.
    pub fn new(order_id: OrderId, sku: Sku, quantity: u32) -> Self {
        Self {
            order_id,
            sku,
            quantity,
            status: OrderStatus::Pending,
            total_cost: Money::ZERO,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_successful(&self) -> bool {
        matches!(self.status, OrderStatus::Fulfilled)
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self.status {
            OrderStatus::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.status = OrderStatus::Pending;
        self.total_cost = Money::ZERO;
    }

    pub(crate) fn fulfill(&mut self, total_cost: Money) {
        self.status = OrderStatus::Fulfilled;
        self.total_cost = total_cost;
    }

    pub(crate) fn reject(&mut self, reason: RejectReason) {
        self.status = OrderStatus::Rejected(reason);
        self.total_cost = Money::ZERO;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}
