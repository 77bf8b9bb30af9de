//! Binary entry point for the `gridsite` CLI.

use clap::Parser;
use gridsite_cli::cli::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    gridsite_cli::app::run(args).await?;
    Ok(())
}
