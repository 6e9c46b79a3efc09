//! Command-line interface definitions

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Generate Liquibase lookup-code changelogs from Excel workbooks
#[derive(Parser)]
#[command(name = "changelog-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert workbook sheets into a changelog document
    Convert(ConvertArgs),
    /// Write a starter workbook with sample lookup-code sheets
    Template(TemplateArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Workbook to convert (.xlsx, .xls, .xlsb or .ods)
    pub input: PathBuf,

    /// Where to write the changelog (defaults to the input name with
    /// an .xml extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Author recorded on every changeset
    #[arg(long)]
    pub author: Option<String>,

    /// Sheets to process, in order (default: every sheet)
    #[arg(long, value_delimiter = ',')]
    pub sheets: Vec<String>,

    /// Print the changelog to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct TemplateArgs {
    /// Where to write the template workbook
    #[arg(default_value = "code-template.xlsx")]
    pub output: PathBuf,
}
