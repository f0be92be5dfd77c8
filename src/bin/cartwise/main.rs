//! Cartwise CLI

use std::io::{self, Write};

use clap::Parser;

use crate::config::Config;

mod commands;
mod config;
mod observability;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    observability::init_subscriber(&config.logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    config.command.run(&mut out)?;

    out.flush()?;

    Ok(())
}
