//! Record sinks: where inventory snapshots, order logs, results and the run
//! summary end up.
//!
//! Every sink writes flat records (CSV rows, one JSON object). Any IO failure
//! is surfaced as a [`SinkError`] and aborts the run.

pub mod csv_journal;
pub mod inventory_csv;
pub mod layout;

pub use csv_journal::CsvJournal;
pub use inventory_csv::{write_catalog, write_stock_levels};
pub use layout::OutputLayout;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
