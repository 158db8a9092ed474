use serde::{Deserialize, Serialize};

use stocksim_core::{DomainError, DomainResult, Entity, Money, Sku};

/// A stock-keeping unit with its price and on-hand quantity.
///
/// Only `quantity` changes after creation, and only downwards (through
/// [`crate::Inventory`] fulfillment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    sku: Sku,
    name: String,
    price: Money,
    quantity: u32,
}

impl Item {
    pub fn new(sku: Sku, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            sku,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of the stock on hand at the current price.
    pub fn stock_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    pub(crate) fn decrement(&mut self, quantity: u32) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;
        Ok(())
    }
}

impl Entity for Item {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
