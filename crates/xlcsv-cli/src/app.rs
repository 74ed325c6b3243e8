//! CLI Application logic
//!
//! Contains the command-line interface implementation: argument
//! parsing and dispatch to the four file operations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xlcsv_data::ops;

#[derive(Parser)]
#[command(name = "xlcsv")]
#[command(author, version, about = "Convert, filter, and sort tabular files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the first sheet of an .xlsx workbook to a quoted .csv file
    ConvertCsv {
        /// Input .xlsx file
        input: PathBuf,
    },

    /// Keep only the named columns of a .csv file, dropping duplicate rows
    Filter {
        /// Input .csv file
        input: PathBuf,

        /// Comma-joined column names (e.g. "Name,City")
        headers: Option<String>,
    },

    /// Build a single-sheet .xlsx workbook from a .csv file
    ConvertExcel {
        /// Input .csv file
        input: PathBuf,
    },

    /// Sort the data rows of a .csv file
    Sort {
        /// Input .csv file
        input: PathBuf,
    },

    // Anything else falls through to "Command not found"
    #[command(external_subcommand)]
    Other(Vec<OsString>),
}

/// Run the CLI application
///
/// Parses arguments and dispatches to the appropriate command. An
/// unrecognized (or missing) command prints "Command not found" and
/// exits successfully.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ConvertCsv { input }) => convert_csv_command(&input),
        Some(Commands::Filter { input, headers }) => filter_command(&input, headers.as_deref()),
        Some(Commands::ConvertExcel { input }) => convert_excel_command(&input),
        Some(Commands::Sort { input }) => sort_command(&input),
        Some(Commands::Other(_)) | None => {
            println!("Command not found");
            Ok(())
        }
    }
}

/// Execute the convert-csv command
pub fn convert_csv_command(input: &Path) -> Result<()> {
    let out = ops::convert_csv(input)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    println!("Wrote: {}", out.display());
    Ok(())
}

/// Execute the filter command
pub fn filter_command(input: &Path, headers: Option<&str>) -> Result<()> {
    let out = ops::filter(input, headers)
        .with_context(|| format!("Failed to filter {}", input.display()))?;
    println!("Wrote: {}", out.display());
    Ok(())
}

/// Execute the convert-excel command
pub fn convert_excel_command(input: &Path) -> Result<()> {
    let out = ops::convert_excel(input)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    println!("Wrote: {}", out.display());
    Ok(())
}

/// Execute the sort command
pub fn sort_command(input: &Path) -> Result<()> {
    let out =
        ops::sort(input).with_context(|| format!("Failed to sort {}", input.display()))?;
    println!("Wrote: {}", out.display());
    Ok(())
}
