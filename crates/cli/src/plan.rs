//! Derivation of generation parameters from the run configuration.
//!
//! - categories: `max(2, items / max_items_per_bucket)` codes picked at random
//!   from `AA..ZZ`;
//! - orders request `1..=max(10, min(100, items / 10))` units;
//! - extra stock per item is bounded by
//!   `65 * max_items_per_order * (orders / items) / 100`, so roughly two thirds
//!   of the expected demand can be served.

use rand::seq::SliceRandom;

use stocksim_core::{DomainError, DomainResult};
use stocksim_inventory::catalog::MAX_EXTRA_STOCK;
use stocksim_inventory::{CatalogSpec, category_codes};
use stocksim_orders::OrderStreamSpec;

use crate::config::Config;
use crate::seeds::RoleSeeds;

const MIN_CATEGORIES: usize = 2;

/// Everything needed to reproduce one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPlan {
    pub seed: u64,
    pub seeds: RoleSeeds,
    pub categories: Vec<String>,
    pub num_items: usize,
    pub max_quantity: u32,
    pub stream: OrderStreamSpec,
}

impl SimulationPlan {
    pub fn derive(config: &Config, seed: u64) -> DomainResult<Self> {
        if config.max_items_per_bucket == 0 {
            return Err(DomainError::validation(
                "max_items_per_bucket must be at least 1",
            ));
        }

        let num_categories = MIN_CATEGORIES.max(config.items / config.max_items_per_bucket);
        let mut codes = category_codes();
        if num_categories > codes.len() {
            return Err(DomainError::validation(format!(
                "{} items at {} per bucket need {num_categories} categories, only {} exist",
                config.items,
                config.max_items_per_bucket,
                codes.len()
            )));
        }

        let seeds = RoleSeeds::from_master(seed);
        codes.shuffle(&mut seeds.categories_rng());
        codes.truncate(num_categories);

        let max_items_per_order = max_items_per_order(config.items);
        let max_quantity = max_quantity(config.items, config.orders, max_items_per_order)?;
        let stream = OrderStreamSpec::new(config.orders, max_items_per_order)?
            .with_progress_every(config.progress_every);

        Ok(Self {
            seed,
            seeds,
            categories: codes,
            num_items: config.items,
            max_quantity,
            stream,
        })
    }

    pub fn catalog_spec(&self) -> CatalogSpec<'_> {
        CatalogSpec {
            categories: &self.categories,
            num_items: self.num_items,
            max_quantity: self.max_quantity,
        }
    }
}

fn max_items_per_order(items: usize) -> u32 {
    (items / 10).clamp(10, 100) as u32
}

fn max_quantity(items: usize, orders: u64, max_items_per_order: u32) -> DomainResult<u32> {
    if items == 0 {
        return Ok(0);
    }
    let orders_per_item = orders / items as u64;
    let bound = 65u128 * u128::from(max_items_per_order) * u128::from(orders_per_item) / 100;
    if bound > u128::from(MAX_EXTRA_STOCK) {
        return Err(DomainError::validation(format!(
            "{orders} orders over {items} items need a stock bound of {bound}, above {MAX_EXTRA_STOCK}"
        )));
    }
    Ok(bound as u32)
}
