//! `stocksim` — synthetic inventory and order-fulfillment simulator.
//!
//! Wires configuration, catalog generation, the order stream and the file
//! sinks into a single run.

pub mod config;
pub mod plan;
pub mod run;
pub mod seeds;

pub use config::Config;
pub use plan::SimulationPlan;
pub use run::{RunReport, run};
pub use seeds::RoleSeeds;
