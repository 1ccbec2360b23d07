// src/bin/cli.rs
use clap::Parser;
use hiring_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    cli::run(cli::Args::parse())?;
    Ok(())
}
