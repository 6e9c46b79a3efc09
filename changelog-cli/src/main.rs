//! Liquibase changelog generation from Excel workbooks

mod changelog;
mod cli;
mod config;
mod template;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => cli::commands::convert::handle_convert_command(args),
        Commands::Template(args) => cli::commands::template::handle_template_command(args),
    }
}
