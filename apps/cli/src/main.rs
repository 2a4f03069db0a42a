//! LayoutPilot CLI: recommend a layout for every section of a landing page.
//!
//! Reads a business context document and an ordered section list, and prints
//! the planned layouts along with the diagnostics behind them.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
