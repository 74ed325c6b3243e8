//! xlcsv CLI - Command-line interface library
//!
//! This library provides the CLI functionality for xlcsv:
//! - convert-csv: first sheet of an `.xlsx` workbook to a quoted `.csv`
//! - filter: keep named columns of a `.csv`, dropping duplicate rows
//! - convert-excel: `.csv` to a single-sheet `.xlsx` workbook
//! - sort: sort the data rows of a `.csv`
//!
//! # Binary Usage
//!
//! ```bash
//! xlcsv convert-csv report.xlsx
//! xlcsv filter report.csv "Name,City"
//! xlcsv convert-excel report.csv
//! xlcsv sort report.csv
//! ```

pub mod app;

// Re-export main entry point and command functions
pub use app::{
    convert_csv_command, convert_excel_command, filter_command, run_cli, sort_command,
};
