//! Rhyme-family extraction.
//!
//! A rhyme family is a short suffix key derived from the final word of a
//! verse's last line, used to group verses by closing sound. This is a
//! heuristic suffix match, not phonetic analysis.

/// Extract the rhyme family from an assembled verse.
///
/// Takes the last line of the verse, then its last whitespace-separated
/// word, lowercases it and strips everything that is not alphanumeric.
/// Returns the last 3 characters if the cleaned word has at least 3,
/// the last 2 if it has at least 2, and `None` otherwise (including when
/// the last line has no words at all).
///
/// Counts are in characters, not bytes, so accented letters are handled
/// correctly.
///
/// # Examples
///
/// ```
/// use rimas_catalog::extract_rhyme_family;
///
/// let verse = "Hoje o sol brilha forte\nE a vida segue em frente";
/// assert_eq!(extract_rhyme_family(verse), Some("nte".to_string()));
///
/// assert_eq!(extract_rhyme_family("vou de fé!"), Some("fé".to_string()));
/// assert_eq!(extract_rhyme_family("e aí, é"), None);
/// ```
pub fn extract_rhyme_family(verse: &str) -> Option<String> {
    let last_line = verse.lines().last()?.trim();
    let last_word = last_line.split_whitespace().last()?;

    let cleaned: String = last_word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    let chars: Vec<char> = cleaned.chars().collect();
    match chars.len() {
        0 | 1 => None,
        2 => Some(cleaned),
        n => Some(chars[n - 3..].iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_last_line_only() {
        let verse = "rima na primeira linha\nfecha com outra palavra";
        assert_eq!(extract_rhyme_family(verse), Some("vra".to_string()));
    }

    #[test]
    fn test_family_strips_punctuation() {
        assert_eq!(
            extract_rhyme_family("a rua me ensinou, irmão!?"),
            Some("mão".to_string())
        );
    }

    #[test]
    fn test_family_lowercases() {
        assert_eq!(extract_rhyme_family("GRITO NO MICROFONE"), Some("one".to_string()));
    }

    #[test]
    fn test_family_two_letter_word() {
        assert_eq!(extract_rhyme_family("segue no flow, vai"), Some("ai".to_string()));
    }

    #[test]
    fn test_family_too_short() {
        // Single alphanumeric character after cleaning
        assert_eq!(extract_rhyme_family("termina em é"), None);
    }

    #[test]
    fn test_family_last_line_blank() {
        // A trailing line of pure punctuation cleans down to nothing
        assert_eq!(extract_rhyme_family("verso\n..."), None);
    }

    #[test]
    fn test_family_is_always_alphanumeric() {
        let verse = "fim de linha: \"frente.\"";
        let family = extract_rhyme_family(verse).unwrap();
        assert_eq!(family, "nte");
        assert!(family.chars().all(char::is_alphanumeric));
    }
}
