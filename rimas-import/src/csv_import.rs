//! Delimited row reading with header-derived field mapping.
//!
//! Input files are UTF-8 CSV with a header row. Column naming varies
//! between sources, so each logical field is resolved through an ordered
//! alias list: the first candidate column that is present and non-blank
//! wins. A column missing from the header behaves exactly like a column
//! that is present but empty.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ImportError;

/// Accepted column names for the category field, in priority order.
pub const CATEGORY_ALIASES: &[&str] = &["categoria", "tema", "category"];

/// Accepted column names for the difficulty field, in priority order.
pub const DIFFICULTY_ALIASES: &[&str] = &["dificuldade", "difficulty"];

/// Column-name prefixes accepted for verse lines, in priority order
/// (`verso1`, `linha1`, `v1`, ...).
const VERSE_LINE_PREFIXES: &[&str] = &["verso", "linha", "v"];

/// One input record, addressed by column name.
///
/// Transient: built per row during reading and discarded after conversion.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

/// A row as produced by the reader: either parsed, or the CSV-level
/// error that made it unreadable. Per-row errors never abort a run.
pub type RowResult = Result<RawRow, csv::Error>;

impl RawRow {
    /// Build a row from explicit (column, value) pairs. Used by tests.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    /// Raw value of a column, if the column exists in the header.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Resolve a logical field through an ordered alias list.
    ///
    /// Returns the first candidate's value that is present and non-blank
    /// (whitespace-only counts as blank), else the empty string. Never
    /// fails.
    pub fn resolve(&self, aliases: &[&str]) -> &str {
        for alias in aliases {
            if let Some(value) = self.get(alias) {
                if !value.trim().is_empty() {
                    return value;
                }
            }
        }
        ""
    }

    /// Resolve verse line `n` (1-based) through the accepted prefixes.
    pub fn verse_line(&self, n: usize) -> &str {
        for prefix in VERSE_LINE_PREFIXES {
            let key = format!("{prefix}{n}");
            if let Some(value) = self.get(&key) {
                if !value.trim().is_empty() {
                    return value;
                }
            }
        }
        ""
    }
}

/// Read rows from a CSV file on disk.
pub fn read_rows_file(path: &Path) -> Result<Vec<RowResult>, ImportError> {
    let contents = std::fs::read_to_string(path)?;
    read_rows(&contents)
}

/// Read rows from CSV content.
///
/// The first record is the header. Rows with a different field count are
/// tolerated (`flexible`): extra values are dropped, missing ones read as
/// absent columns. A row the CSV parser cannot decode at all is returned
/// as an `Err` entry so the caller can report it against its row index.
pub fn read_rows(content: &str) -> Result<Vec<RowResult>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                let fields = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.clone(), v.to_string()))
                    .collect();
                rows.push(Ok(RawRow { fields }));
            }
            Err(e) => {
                log::warn!("Unreadable CSV row: {e}");
                rows.push(Err(e));
            }
        }
    }

    Ok(rows)
}
