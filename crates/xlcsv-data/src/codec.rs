//! Quoted-row codec for the tool's CSV dialect.
//!
//! The on-disk text format wraps every row in a single pair of double
//! quotes and re-inserts field-boundary quoting only at commas that are
//! immediately followed by a letter (`"Name","Age"` but `"Alice,30"`).
//! Commas followed by a digit or punctuation keep the boundary
//! unquoted, so numeric data is not individually quoted. That rule is
//! part of the format, not a bug to fix here.

use std::sync::OnceLock;

use regex::Regex;

static LETTER_COMMA_RE: OnceLock<Regex> = OnceLock::new();

/// Encode standard CSV text into the quoted dialect.
///
/// Steps, applied to the whole text in order:
/// 1. remove every double-quote character
/// 2. wrap each line (split on `\n`) in one pair of double quotes
/// 3. replace each comma followed by `[a-zA-Z]` with `","`
/// 4. drop lines whose entire content is `""`
pub fn encode(csv_text: &str) -> String {
    let stripped = csv_text.replace('"', "");

    let wrapped = stripped
        .split('\n')
        .map(|line| format!("\"{line}\""))
        .collect::<Vec<_>>()
        .join("\n");

    let re = LETTER_COMMA_RE.get_or_init(|| Regex::new(r",([a-zA-Z])").unwrap());
    let quoted = re.replace_all(&wrapped, "\",\"$1");

    quoted
        .split('\n')
        .filter(|line| *line != "\"\"")
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip one pair of wrapping double quotes from a field, yielding its
/// logical value. Fields without both quotes are returned unchanged.
pub fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(field)
}

/// Render column names as a quoted header line: `"h1","h2",...`.
pub fn quoted_header(names: &[&str]) -> String {
    format!("\"{}\"", names.join("\",\""))
}
