//! Delimited-file loading and sibling output naming.
//!
//! Files are handled as raw text split on `\n`: line 0 is the header
//! line, everything after it is a data line. A trailing newline in the
//! source therefore produces one empty data line; that is the format's
//! behavior and downstream passes rely on it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DataError, Result};

/// Extension a loaded file must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Delimited-text file, `.csv`
    Csv,
    /// Spreadsheet workbook, `.xlsx`
    Excel,
}

impl FileKind {
    /// Required file-name suffix
    pub fn suffix(self) -> &'static str {
        match self {
            FileKind::Csv => ".csv",
            FileKind::Excel => ".xlsx",
        }
    }
}

/// Validate that a path exists and carries the required extension.
pub fn check_path(path: &Path, kind: FileKind) -> Result<()> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }

    if !path.to_string_lossy().ends_with(kind.suffix()) {
        return Err(match kind {
            FileKind::Csv => DataError::NotCsv(path.display().to_string()),
            FileKind::Excel => DataError::NotExcel(path.display().to_string()),
        });
    }

    Ok(())
}

/// Derive the output path next to `path` by swapping the extension
/// suffix (`data.csv` + `.sorted.csv` -> `data.sorted.csv`).
pub fn sibling_path(path: &Path, kind: FileKind, new_suffix: &str) -> PathBuf {
    let name = path.to_string_lossy();
    let stem = name.strip_suffix(kind.suffix()).unwrap_or(&name);
    PathBuf::from(format!("{stem}{new_suffix}"))
}

/// A delimited-text file loaded into memory
#[derive(Debug)]
pub struct DelimitedFile {
    /// Source path
    path: PathBuf,
    /// Raw file contents
    text: String,
}

impl DelimitedFile {
    /// Load a file after checking existence and extension.
    pub fn open(path: impl AsRef<Path>, kind: FileKind) -> Result<Self> {
        let path = path.as_ref();
        check_path(path, kind)?;

        let text = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first line of the file, verbatim
    pub fn header_line(&self) -> &str {
        self.text.split('\n').next().unwrap_or("")
    }

    /// Header tokens: the header line split on `,`, wrapping quotes
    /// left in place (`"Name"`, not `Name`)
    pub fn header_tokens(&self) -> Vec<&str> {
        self.header_line().split(',').collect()
    }

    /// Every line after the header, including a trailing empty line if
    /// the file ends with a newline
    pub fn data_lines(&self) -> Vec<&str> {
        self.text.split('\n').skip(1).collect()
    }

    /// Output path next to this file (see [`sibling_path`])
    pub fn sibling(&self, kind: FileKind, new_suffix: &str) -> PathBuf {
        sibling_path(&self.path, kind, new_suffix)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_open_missing_file() {
        let err = DelimitedFile::open("/nonexistent/data.csv", FileKind::Csv).unwrap_err();
        assert!(err.to_string().starts_with("File does not exist"));
    }

    #[test]
    fn test_open_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.txt", "a,b\n");

        let err = DelimitedFile::open(&path, FileKind::Csv).unwrap_err();
        assert!(err.to_string().starts_with("File is not a csv file"));

        let err = DelimitedFile::open(&path, FileKind::Excel).unwrap_err();
        assert!(err.to_string().starts_with("File is not an excel file"));
    }

    #[test]
    fn test_header_and_data_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.csv", "\"A\",\"B\"\n1,2\n3,4\n");

        let file = DelimitedFile::open(&path, FileKind::Csv).unwrap();
        assert_eq!(file.header_line(), "\"A\",\"B\"");
        assert_eq!(file.header_tokens(), vec!["\"A\"", "\"B\""]);
        // trailing newline yields a final empty data line
        assert_eq!(file.data_lines(), vec!["1,2", "3,4", ""]);
    }

    #[test]
    fn test_sibling_path() {
        let path = Path::new("/tmp/report.csv");
        assert_eq!(
            sibling_path(path, FileKind::Csv, ".filtered.csv"),
            PathBuf::from("/tmp/report.filtered.csv")
        );
        assert_eq!(
            sibling_path(Path::new("book.xlsx"), FileKind::Excel, ".csv"),
            PathBuf::from("book.csv")
        );
    }
}
