//! Random catalog generation.
//!
//! Items are spread round-robin over category buckets: item `i` goes to bucket
//! `i % categories` with in-bucket index `i / categories`, so its SKU is the
//! category code followed by that index. Prices use "attractive" cent endings
//! and are never below 1.00. The finished store is shuffled so positional order
//! does not follow creation order.

use rand::Rng;
use tracing::{debug, info};

use stocksim_core::{DomainError, DomainResult, Money, Sku};

use crate::item::Item;
use crate::store::Inventory;

/// Cent endings used for generated prices.
pub const PRICE_ENDINGS: [u64; 9] = [19, 29, 39, 49, 59, 69, 79, 89, 99];

/// Cent endings used when a drawn price would fall below 1.00.
pub const FALLBACK_PRICE_ENDINGS: [u64; 2] = [49, 99];

/// Every generated item starts with at least this many units.
pub const MIN_STOCK: u32 = 10;

/// Largest accepted [`CatalogSpec::max_quantity`]; keeps `MIN_STOCK + extra` within `u32`.
pub const MAX_EXTRA_STOCK: u32 = u32::MAX - MIN_STOCK;

const MIN_PRICE: Money = Money::new(1, 0);

/// All two-letter category codes, `AA` through `ZZ`.
pub fn category_codes() -> Vec<String> {
    let letters = 'A'..='Z';
    letters
        .clone()
        .flat_map(|a| letters.clone().map(move |b| format!("{a}{b}")))
        .collect()
}

/// Parameters for [`generate_catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogSpec<'a> {
    pub categories: &'a [String],
    pub num_items: usize,
    /// Upper bound (exclusive) of the random stock added on top of [`MIN_STOCK`].
    pub max_quantity: u32,
}

/// Generate a shuffled inventory of exactly `spec.num_items` items.
pub fn generate_catalog<R: Rng + ?Sized>(
    spec: &CatalogSpec<'_>,
    rng: &mut R,
) -> DomainResult<Inventory> {
    if spec.num_items > 0 && spec.categories.is_empty() {
        return Err(DomainError::validation(
            "at least one category is required to generate items",
        ));
    }
    if spec.max_quantity > MAX_EXTRA_STOCK {
        return Err(DomainError::validation(format!(
            "max_quantity {} exceeds {MAX_EXTRA_STOCK}",
            spec.max_quantity
        )));
    }

    info!(
        num_items = spec.num_items,
        categories = %spec.categories.join(", "),
        "generating random items"
    );

    let num_categories = spec.categories.len();
    let mut inventory = Inventory::with_capacity(spec.num_items);

    for i in 0..spec.num_items {
        let category = &spec.categories[i % num_categories];
        let item = Item::new(
            Sku::from_parts(category, i / num_categories),
            format!("Item {i:06X}"),
            draw_price(rng),
            draw_quantity(spec.max_quantity, rng),
        );
        inventory.add_item(item)?;
    }

    inventory.shuffle(rng);

    debug!(
        items = inventory.len(),
        total_units = inventory.total_units(),
        stock_value = %inventory.stock_value(),
        "catalog generated"
    );

    Ok(inventory)
}

fn draw_price<R: Rng + ?Sized>(rng: &mut R) -> Money {
    let whole = rng.gen_range(1..100);
    let ending = PRICE_ENDINGS[rng.gen_range(0..PRICE_ENDINGS.len())];
    settle_price(Money::new(whole, ending), rng)
}

fn settle_price<R: Rng + ?Sized>(price: Money, rng: &mut R) -> Money {
    if price >= MIN_PRICE {
        return price;
    }
    let ending = FALLBACK_PRICE_ENDINGS[rng.gen_range(0..FALLBACK_PRICE_ENDINGS.len())];
    Money::new(1, ending)
}

fn draw_quantity<R: Rng + ?Sized>(max_quantity: u32, rng: &mut R) -> u32 {
    if max_quantity == 0 {
        return MIN_STOCK;
    }
    MIN_STOCK + rng.gen_range(0..max_quantity.min(MAX_EXTRA_STOCK))
}
