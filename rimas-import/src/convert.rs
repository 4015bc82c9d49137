//! Row-to-record conversion.
//!
//! Each input row carries up to 8 verse-line columns plus category and
//! difficulty columns. Conversion assembles the lines into one verse,
//! derives the rhyme family and ranking, and normalizes the metadata.
//! Rows that yield no verse text are skipped and counted, never emitted.

use rimas_catalog::{Difficulty, RhymeRecord, extract_rhyme_family};
use thiserror::Error;

use crate::csv_import::{CATEGORY_ALIASES, DIFFICULTY_ALIASES, RawRow, RowResult};
use crate::progress::ConvertProgress;

/// Theme used when no category-like column resolves.
const DEFAULT_THEME: &str = "geral";

/// Maximum number of verse-line columns per row.
const MAX_VERSE_LINES: usize = 8;

#[derive(Debug, Error)]
enum RowError {
    #[error("no valid verse")]
    NoValidVerse,
}

/// Statistics from a single conversion run.
#[derive(Debug, Default)]
pub struct ConvertStats {
    /// Total data rows read from the input (including failed ones).
    pub rows_read: u64,
    /// Rows successfully converted to records.
    pub converted: u64,
    /// One message per failed row: `"Row {i}: {cause}"`, 1-indexed.
    pub errors: Vec<String>,
}

/// Join up to 8 candidate lines into one verse.
///
/// Each line is trimmed; empty results are dropped; the survivors keep
/// their relative order and are joined with a single newline. An empty
/// result means the row had no usable verse text and must be rejected
/// by the caller.
pub fn assemble_verse(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heuristic complexity score in [60,100].
///
/// Base score from line count (≥8 → 90, ≥4 → 75, else 60), plus a bonus
/// from the average line length in characters (>60 → +10, >40 → +5),
/// clamped at 100.
pub fn calculate_ranking(verse: &str) -> u32 {
    let lines: Vec<&str> = verse.split('\n').collect();
    let num_lines = lines.len();

    let mut score: u32 = if num_lines >= 8 {
        90
    } else if num_lines >= 4 {
        75
    } else {
        60
    };

    let total_chars: usize = lines.iter().map(|l| l.chars().count()).sum();
    let avg_length = total_chars as f64 / num_lines as f64;
    if avg_length > 60.0 {
        score += 10;
    } else if avg_length > 40.0 {
        score += 5;
    }

    score.min(100)
}

/// Convert one row into a record.
fn convert_row(row: &RawRow) -> Result<RhymeRecord, RowError> {
    let lines: Vec<&str> = (1..=MAX_VERSE_LINES).map(|n| row.verse_line(n)).collect();

    let verse = assemble_verse(&lines);
    if verse.is_empty() {
        return Err(RowError::NoValidVerse);
    }

    let category = row.resolve(CATEGORY_ALIASES).trim().to_lowercase();
    let theme = if category.is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        category
    };

    let difficulty = Difficulty::from_label(row.resolve(DIFFICULTY_ALIASES));
    let rhyme_family = extract_rhyme_family(&verse);
    let ranking = calculate_ranking(&verse);

    Ok(RhymeRecord {
        verse,
        theme,
        difficulty,
        rhyme_family,
        ranking,
        is_featured: false,
    })
}

/// Convert all input rows, accumulating records and per-row errors.
///
/// Row indices in error messages are 1-based over data rows (the header
/// is not counted). A failed row is skipped and recorded; the run never
/// aborts because of a single row.
///
/// The optional `progress` callback is invoked after each row.
pub fn convert_rows(
    rows: Vec<RowResult>,
    progress: Option<&dyn ConvertProgress>,
) -> (Vec<RhymeRecord>, ConvertStats) {
    let total = rows.len();
    let mut records = Vec::new();
    let mut stats = ConvertStats::default();

    for (i, row) in rows.into_iter().enumerate() {
        let index = i + 1;
        stats.rows_read += 1;

        match row {
            Ok(row) => match convert_row(&row) {
                Ok(record) => {
                    records.push(record);
                    stats.converted += 1;
                }
                Err(e) => {
                    log::warn!("Skipping row {index}: {e}");
                    stats.errors.push(format!("Row {index}: {e}"));
                }
            },
            Err(e) => {
                log::warn!("Skipping row {index}: {e}");
                stats.errors.push(format!("Row {index}: {e}"));
            }
        }

        if let Some(p) = progress {
            p.on_row(index, total);
        }
    }

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Converted {} of {} rows ({} errors)",
            stats.converted,
            stats.rows_read,
            stats.errors.len(),
        ));
    }

    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_verse_trims_and_drops_blanks() {
        let verse = assemble_verse(&["  primeira linha  ", "", "   ", "segunda linha"]);
        assert_eq!(verse, "primeira linha\nsegunda linha");
    }

    #[test]
    fn test_assemble_verse_preserves_order() {
        let verse = assemble_verse(&["um", "dois", "", "três"]);
        assert_eq!(verse, "um\ndois\ntrês");
    }

    #[test]
    fn test_assemble_verse_all_blank() {
        assert_eq!(assemble_verse(&["", "  ", "\t"]), "");
    }

    #[test]
    fn test_ranking_two_short_lines() {
        // 2 lines, short average: base 60, no bonus
        assert_eq!(calculate_ranking("curta\noutra curta"), 60);
    }

    #[test]
    fn test_ranking_four_lines_medium_length() {
        let line = "uma linha com comprimento acima de quarenta car"; // 47 chars
        let verse = [line; 4].join("\n");
        assert_eq!(calculate_ranking(&verse), 80);
    }

    #[test]
    fn test_ranking_eight_long_lines_clamps_at_100() {
        let line = "a".repeat(65);
        let verse = vec![line.as_str(); 8].join("\n");
        assert_eq!(calculate_ranking(&verse), 100);
    }

    #[test]
    fn test_ranking_length_counts_chars_not_bytes() {
        // 41 accented chars per line: 41 > 40 only when counted in chars
        let line = "ã".repeat(41);
        let verse = format!("{line}\n{line}");
        assert_eq!(calculate_ranking(&verse), 65);
    }
}
