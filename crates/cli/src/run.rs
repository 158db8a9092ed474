//! One end-to-end simulation run.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use stocksim_core::Money;
use stocksim_infra::{CsvJournal, OutputLayout, write_catalog, write_stock_levels};
use stocksim_inventory::generate_catalog;
use stocksim_orders::{OrderSummary, run_orders};

use crate::config::Config;
use crate::plan::SimulationPlan;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub output_dir: PathBuf,
    pub items: usize,
    pub summary: OrderSummary,
    pub remaining_units: u64,
    pub remaining_stock_value: Money,
}

/// Derive the plan from `config` and execute it. A missing seed is drawn at
/// random and reported so the run can be replayed.
pub fn run(config: &Config) -> anyhow::Result<RunReport> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let plan = SimulationPlan::derive(config, seed).context("invalid simulation parameters")?;
    execute(&plan, &OutputLayout::new(&config.data_dir))
}

/// Generate the catalog, stream all orders through it, and write every output
/// file of `layout`.
pub fn execute(plan: &SimulationPlan, layout: &OutputLayout) -> anyhow::Result<RunReport> {
    info!(seed = plan.seed, dir = %layout.dir().display(), "starting simulation");

    layout
        .ensure_dir()
        .with_context(|| format!("failed to create output directory {}", layout.dir().display()))?;

    let mut inventory = generate_catalog(&plan.catalog_spec(), &mut plan.seeds.catalog_rng())
        .context("failed to generate catalog")?;

    info!(path = %layout.inventory().display(), "writing items");
    write_catalog(create(layout.inventory())?, &inventory)
        .with_context(|| format!("failed to write {}", layout.inventory().display()))?;

    let mut journal = CsvJournal::create(layout).context("failed to open order logs")?;
    let summary = run_orders(
        &mut inventory,
        &plan.stream,
        &mut plan.seeds.orders_rng(),
        &mut journal,
    )
    .context("failed to record orders")?;
    journal.into_inner().context("failed to flush order logs")?;

    info!(path = %layout.inventory_out().display(), "writing inventory result");
    write_stock_levels(create(layout.inventory_out())?, &inventory)
        .with_context(|| format!("failed to write {}", layout.inventory_out().display()))?;

    let report = RunReport {
        seed: plan.seed,
        output_dir: layout.dir().to_path_buf(),
        items: inventory.len(),
        summary,
        remaining_units: inventory.total_units(),
        remaining_stock_value: inventory.stock_value(),
    };

    info!(
        total_orders = summary.total_orders,
        success_orders = summary.success_orders,
        failed_orders = summary.failed_orders,
        total_revenue = %summary.total_revenue,
        success_rate = summary.success_rate(),
        remaining_units = report.remaining_units,
        "simulation finished"
    );

    Ok(report)
}

fn create(path: PathBuf) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
