//! Inventory snapshots as CSV, in the store's current positional order.

use std::io::Write;

use serde::Serialize;

use stocksim_inventory::Inventory;

use super::SinkError;

const CATALOG_HEADER: [&str; 4] = ["sku", "item_name", "price", "quantity"];
const STOCK_HEADER: [&str; 2] = ["sku", "quantity"];

#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    sku: &'a str,
    item_name: &'a str,
    price: String,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct StockRow<'a> {
    sku: &'a str,
    quantity: u32,
}

/// Write `sku,item_name,price,quantity` for every item.
pub fn write_catalog<W: Write>(writer: W, inventory: &Inventory) -> Result<(), SinkError> {
    let mut csv = headed_writer(writer, &CATALOG_HEADER)?;
    for item in inventory.items() {
        csv.serialize(CatalogRow {
            sku: item.sku().as_str(),
            item_name: item.name(),
            price: item.price().to_string(),
            quantity: item.quantity(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `sku,quantity` for every item.
pub fn write_stock_levels<W: Write>(writer: W, inventory: &Inventory) -> Result<(), SinkError> {
    let mut csv = headed_writer(writer, &STOCK_HEADER)?;
    for item in inventory.items() {
        csv.serialize(StockRow {
            sku: item.sku().as_str(),
            quantity: item.quantity(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// CSV writer with the header already written, so empty tables still carry one.
pub(crate) fn headed_writer<W: Write>(
    writer: W,
    header: &[&str],
) -> Result<csv::Writer<W>, SinkError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(header)?;
    Ok(csv)
}
