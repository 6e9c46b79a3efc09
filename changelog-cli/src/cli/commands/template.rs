//! Template command handler

use anyhow::Result;
use colored::*;

use crate::cli::TemplateArgs;
use crate::template::write_template;

/// Handle the template command
pub fn handle_template_command(args: TemplateArgs) -> Result<()> {
    write_template(&args.output)?;
    println!(
        "Wrote template workbook {}",
        args.output.display().to_string().cyan()
    );
    Ok(())
}
