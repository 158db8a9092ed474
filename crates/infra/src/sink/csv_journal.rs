//! File-backed order journal: two CSV logs plus a JSON summary.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use stocksim_inventory::Order;
use stocksim_orders::{OrderJournal, OrderSummary};

use super::inventory_csv::headed_writer;
use super::{OutputLayout, SinkError};

const ORDER_HEADER: [&str; 3] = ["order_id", "sku", "quantity"];
const RESULT_HEADER: [&str; 5] = ["order_id", "success", "sku", "quantity", "total_cost"];

#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    order_id: &'a str,
    sku: &'a str,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    order_id: &'a str,
    success: bool,
    sku: &'a str,
    quantity: u32,
    total_cost: String,
}

/// Journal writing `order_id,sku,quantity` for raw orders,
/// `order_id,success,sku,quantity,total_cost` for outcomes, and the summary
/// as a pretty-printed JSON object.
pub struct CsvJournal<W: Write> {
    orders: csv::Writer<W>,
    results: csv::Writer<W>,
    summary: W,
}

impl<W: Write> CsvJournal<W> {
    /// Wrap three writers and emit both CSV headers.
    pub fn new(orders: W, results: W, summary: W) -> Result<Self, SinkError> {
        Ok(Self {
            orders: headed_writer(orders, &ORDER_HEADER)?,
            results: headed_writer(results, &RESULT_HEADER)?,
            summary,
        })
    }

    /// Flush everything and hand back the underlying writers.
    pub fn into_inner(self) -> Result<(W, W, W), SinkError> {
        let orders = self
            .orders
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))?;
        let results = self
            .results
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))?;
        let mut summary = self.summary;
        summary.flush()?;
        Ok((orders, results, summary))
    }
}

impl CsvJournal<BufWriter<File>> {
    /// Create (truncating) the order, result and summary files of `layout`.
    pub fn create(layout: &OutputLayout) -> Result<Self, SinkError> {
        let open = |path: std::path::PathBuf| -> Result<BufWriter<File>, SinkError> {
            Ok(BufWriter::new(File::create(path)?))
        };
        Self::new(
            open(layout.orders())?,
            open(layout.orders_result())?,
            open(layout.orders_out())?,
        )
    }
}

impl<W: Write> OrderJournal for CsvJournal<W> {
    type Error = SinkError;

    fn record_order(&mut self, order: &Order) -> Result<(), Self::Error> {
        self.orders.serialize(OrderRow {
            order_id: order.order_id().as_str(),
            sku: order.sku().as_str(),
            quantity: order.quantity(),
        })?;
        Ok(())
    }

    fn record_result(&mut self, order: &Order) -> Result<(), Self::Error> {
        self.results.serialize(ResultRow {
            order_id: order.order_id().as_str(),
            success: order.is_successful(),
            sku: order.sku().as_str(),
            quantity: order.quantity(),
            total_cost: order.total_cost().to_string(),
        })?;
        Ok(())
    }

    fn record_summary(&mut self, summary: &OrderSummary) -> Result<(), Self::Error> {
        self.orders.flush()?;
        self.results.flush()?;
        serde_json::to_writer_pretty(&mut self.summary, summary)?;
        writeln!(self.summary)?;
        self.summary.flush()?;
        Ok(())
    }
}
