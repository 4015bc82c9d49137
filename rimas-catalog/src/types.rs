//! Data model types for converted rhyme records.
//!
//! These types represent the import-ready record schema: one consolidated
//! multi-line verse per record, annotated with theme, difficulty, rhyme
//! family, and a heuristic ranking.

use serde::{Deserialize, Serialize};

// ── Difficulty ──────────────────────────────────────────────────────────────

/// Difficulty level of a rhyme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Normalize a free-text difficulty label to a `Difficulty`.
    ///
    /// Accepts the accented and unaccented Portuguese variants,
    /// case-insensitively. Empty input and unrecognized labels both fall
    /// back to `Medium`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rimas_catalog::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_label("Fácil"), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_label("dificil"), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_label("hardcore"), Difficulty::Medium);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "fácil" | "facil" => Self::Easy,
            "média" | "media" | "médio" | "medio" => Self::Medium,
            "difícil" | "dificil" => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// The lowercase string form used in the output JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

// ── RhymeRecord ─────────────────────────────────────────────────────────────

/// A converted rhyme, ready for downstream import.
///
/// `verse` is never empty: rows whose line columns are all blank are
/// rejected during conversion rather than emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeRecord {
    /// Full verse text, newline-joined trimmed lines, no blank lines.
    pub verse: String,
    /// Category/topic label, lowercased and trimmed.
    pub theme: String,
    /// Normalized difficulty level.
    pub difficulty: Difficulty,
    /// Suffix key grouping verses by closing sound (2–3 characters),
    /// or `None` when the final word is too short to derive one.
    pub rhyme_family: Option<String>,
    /// Heuristic complexity score in [0,100].
    pub ranking: u32,
    /// Editorial highlight flag. Always `false` at conversion time.
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_accented_variants() {
        assert_eq!(Difficulty::from_label("fácil"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("facil"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("média"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("media"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("médio"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("medio"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("difícil"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("dificil"), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_case_and_whitespace() {
        assert_eq!(Difficulty::from_label("  FÁCIL  "), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Difícil"), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_unrecognized_defaults_to_medium() {
        assert_eq!(Difficulty::from_label("hardcore"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("easy"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    #[test]
    fn test_record_round_trip() {
        let record = RhymeRecord {
            verse: "Hoje o sol brilha forte\nE a vida segue em frente".to_string(),
            theme: "motivação".to_string(),
            difficulty: Difficulty::Easy,
            rhyme_family: Some("nte".to_string()),
            ranking: 60,
            is_featured: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: RhymeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_absent_family_is_null() {
        let record = RhymeRecord {
            verse: "lá".to_string(),
            theme: "geral".to_string(),
            difficulty: Difficulty::Medium,
            rhyme_family: None,
            ranking: 60,
            is_featured: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"rhyme_family\":null"));
    }
}
