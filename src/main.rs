use anyhow::Context;
use clap::Parser;

use catalog_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli).context("Failed to load configuration")?;

    // A dry run only prints its report
    if !cli.is_dry_run() {
        init_logger_from_settings(&settings).context("Failed to initialize logger")?;
    }

    execute_command(&cli, settings).await?;

    Ok(())
}
