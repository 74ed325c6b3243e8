//! # xlcsv-data
//!
//! Conversion core for xlcsv - move tabular data between `.xlsx`
//! workbooks and a quoted `.csv` dialect, filter rows by named columns,
//! and sort rows.
//!
//! ## Features
//!
//! - **Quoted-Row Codec**: the tool's CSV dialect (every row wrapped in
//!   double quotes, field boundaries quoted only at letter-adjacent
//!   commas)
//! - **Workbook Bridge**: first-sheet reads via `calamine`, single-sheet
//!   writes as a minimal XLSX package
//! - **Operations**: `convert_csv`, `filter`, `convert_excel`, `sort`,
//!   each writing a sibling output file
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use xlcsv_data::ops;
//!
//! // Convert the first sheet of a workbook to the quoted dialect
//! let out = ops::convert_csv(Path::new("data.xlsx"))?;
//!
//! // Keep two columns, dropping duplicate rows
//! let filtered = ops::filter(&out, Some("Name,City"))?;
//! ```

pub mod codec;
pub mod error;
pub mod excel;
pub mod ops;
pub mod table;
pub mod xlsx;

// Re-exports
pub use error::{DataError, Result};
pub use table::{DelimitedFile, FileKind};
pub use xlsx::XlsxBuilder;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
