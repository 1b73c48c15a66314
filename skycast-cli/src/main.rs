//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive forecast session
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;
mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
