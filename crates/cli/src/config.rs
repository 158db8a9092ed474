//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::Parser;

use stocksim_observability::LogFormat;

/// Runtime parameters of one simulation run.
#[derive(Debug, Clone, Parser)]
#[command(name = "stocksim")]
#[command(about = "Generate a random inventory and a stream of orders against it")]
#[command(version)]
pub struct Config {
    /// Directory receiving the CSV/JSON output files (created if missing)
    #[arg(long, env = "STOCKSIM_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Number of catalog items to generate
    #[arg(long, env = "STOCKSIM_ITEMS", default_value_t = 100_000)]
    pub items: usize,

    /// Number of orders to generate
    #[arg(long, env = "STOCKSIM_ORDERS", default_value_t = 1_000_000)]
    pub orders: u64,

    /// Items per category bucket; decides how many categories are used
    #[arg(long, env = "STOCKSIM_MAX_ITEMS_PER_BUCKET", default_value_t = 10_000)]
    pub max_items_per_bucket: usize,

    /// Master seed; a random one is drawn (and logged) when absent
    #[arg(long, env = "STOCKSIM_SEED")]
    pub seed: Option<u64>,

    /// Log output format: compact or json
    #[arg(long, env = "STOCKSIM_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// Log a progress line every N orders (0 disables)
    #[arg(long, env = "STOCKSIM_PROGRESS_EVERY", default_value_t = 1_000_000)]
    pub progress_every: u64,
}

impl Config {
    /// Configuration with defaults, writing into `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            items: 100_000,
            orders: 1_000_000,
            max_items_per_bucket: 10_000,
            seed: None,
            log_format: LogFormat::Compact,
            progress_every: 1_000_000,
        }
    }
}
