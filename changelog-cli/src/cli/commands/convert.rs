//! Convert command handler

use std::fs;

use anyhow::{Context, Result};
use colored::*;

use crate::changelog::{self, ConvertOptions};
use crate::cli::ConvertArgs;
use crate::config::Config;

/// Handle the convert command
pub fn handle_convert_command(args: ConvertArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read workbook: {}", args.input.display()))?;

    let config = Config::load();
    let options = ConvertOptions {
        author: config.resolve_author(args.author),
        sheets: args.sheets,
    };

    let conversion = changelog::convert(&bytes, &options)
        .with_context(|| format!("Failed to convert workbook: {}", args.input.display()))?;

    if args.stdout {
        print!("{}", conversion.xml);
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("xml"));
    fs::write(&output, &conversion.xml)
        .with_context(|| format!("Failed to write changelog: {}", output.display()))?;

    println!("Wrote {}", output.display().to_string().cyan());
    println!(
        "Processed {} sheet(s): {}",
        conversion.processed_sheets.len(),
        conversion.processed_sheets.join(", ").green()
    );

    let skipped: Vec<String> = options
        .sheets
        .iter()
        .filter(|name| !conversion.processed_sheets.contains(*name))
        .cloned()
        .collect();
    if !skipped.is_empty() {
        println!(
            "Skipped {} sheet(s): {}",
            skipped.len(),
            skipped.join(", ").yellow()
        );
    }

    Ok(())
}
