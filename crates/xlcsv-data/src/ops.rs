//! The four file operations: convert-csv, filter, convert-excel, sort.
//!
//! Each operation is a single read -> transform -> write with no
//! intermediate state; the output is a sibling file next to the input.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{DataError, Result};
use crate::excel;
use crate::table::{check_path, DelimitedFile, FileKind};
use crate::xlsx::XlsxBuilder;

/// Convert the first sheet of an `.xlsx` workbook to a quoted `.csv`
/// file next to it.
///
/// The source file is rewritten with its own bytes once the output
/// exists; the rewrite is ordered strictly after the primary write.
pub fn convert_csv(path: &Path) -> Result<PathBuf> {
    check_path(path, FileKind::Excel)?;

    let source = fs::read(path)?;
    let rows = excel::first_sheet_rows(path)?;
    let csv_text = render_csv(&rows)?;

    let out = crate::table::sibling_path(path, FileKind::Excel, ".csv");
    fs::write(&out, codec::encode(&csv_text))?;
    fs::write(path, source)?;

    Ok(out)
}

/// Render a cell grid as standard CSV text (quoting only where the
/// format requires it, `\n` after every record).
fn render_csv(rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DataError::Csv(e.to_string()))
}

/// Restrict a `.csv` file to the named columns, dropping exact-duplicate
/// data rows.
///
/// `headers` is the comma-joined list of column names; each must match
/// a header token of the file as `"<name>"`. The surviving rows' order
/// is whatever the de-duplication set yields, not the input order.
pub fn filter(path: &Path, headers: Option<&str>) -> Result<PathBuf> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }
    let requested_raw = headers
        .filter(|h| !h.is_empty())
        .ok_or(DataError::MissingHeaders)?;

    let file = DelimitedFile::open(path, FileKind::Csv)?;
    let tokens = file.header_tokens();
    let requested: Vec<&str> = requested_raw.split(',').collect();

    // Lookup is by literal quoted-token equality, not by decoded value
    let lookups: Vec<(&str, Option<usize>)> = requested
        .iter()
        .map(|name| {
            let quoted = format!("\"{name}\"");
            (*name, tokens.iter().position(|t| *t == quoted))
        })
        .collect();

    let missing: Vec<&str> = lookups
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(DataError::InvalidHeaders(missing.join(", ")));
    }

    let indices: Vec<usize> = lookups.into_iter().filter_map(|(_, idx)| idx).collect();

    let body: Vec<String> = file
        .data_lines()
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            indices
                .iter()
                .map(|&i| fields.get(i).copied().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    let header_line = codec::quoted_header(&requested);
    let out = file.sibling(FileKind::Csv, ".filtered.csv");
    fs::write(&out, format!("{header_line}\n{}", body.join("\n")))?;

    // Second pass over the written file drops exact-duplicate rows
    let written = fs::read_to_string(&out)?;
    let survivors: HashSet<&str> = written.split('\n').skip(1).collect();
    let survivors: Vec<&str> = survivors.into_iter().collect();
    fs::write(&out, format!("{header_line}\n{}", survivors.join("\n")))?;

    Ok(out)
}

/// Sort the data rows of a `.csv` file by full raw line text.
pub fn sort(path: &Path) -> Result<PathBuf> {
    let file = DelimitedFile::open(path, FileKind::Csv)?;

    let header_line = file.header_line();
    let mut rows = file.data_lines();
    rows.sort_unstable();

    let out = file.sibling(FileKind::Csv, ".sorted.csv");
    fs::write(&out, format!("{header_line}\n{}", rows.join("\n")))?;

    Ok(out)
}

/// Build a single-sheet `.xlsx` workbook from a `.csv` file.
///
/// Every cell is stripped of double-quote characters before it lands in
/// the workbook.
pub fn convert_excel(path: &Path) -> Result<PathBuf> {
    let file = DelimitedFile::open(path, FileKind::Csv)?;

    let grid: Vec<Vec<String>> = file
        .text()
        .split('\n')
        .map(|row| row.split(',').map(|cell| cell.replace('"', "")).collect())
        .collect();

    let out = file.sibling(FileKind::Csv, ".xlsx");
    XlsxBuilder::new(grid).write_to_file(&out)?;

    Ok(out)
}
