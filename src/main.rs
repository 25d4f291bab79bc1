use anyhow::Context;
use clap::Parser;
use visionspec_lib::{cli, RecommendationEngine};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = cli::Cli::parse()
        .into_command()
        .context("Invalid input")?;

    let engine = RecommendationEngine::global().context("Failed to load the base table")?;
    println!("{}", cli::run(command, engine)?);
    Ok(())
}
