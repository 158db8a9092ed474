use clap::Parser;

use stocksim_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stocksim_observability::init(config.log_format);

    let report = stocksim_cli::run(&config)?;

    tracing::info!(
        report = %serde_json::to_string(&report)?,
        "done"
    );
    Ok(())
}
