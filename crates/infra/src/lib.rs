//! Infrastructure layer: file-backed record sinks for simulation output.

pub mod sink;

pub use sink::{CsvJournal, OutputLayout, SinkError, write_catalog, write_stock_levels};
