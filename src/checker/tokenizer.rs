use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Strip everything except word characters, digits, apostrophes,
    // hyphens and whitespace before splitting into tokens.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\d'\-\s]+").unwrap();
}

/// Normalize alt text and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(text, "")
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        let tokens = tokenize("A photo, of the team!");
        assert_eq!(tokens, vec!["A", "photo", "of", "the", "team"]);
    }

    #[test]
    fn test_keeps_apostrophes_and_hyphens() {
        let tokens = tokenize("the team's well-known logo");
        assert_eq!(tokens, vec!["the", "team's", "well-known", "logo"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
        assert!(tokenize("!?.,;:").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = tokenize("Chart: Q3 results (2024)");
        let again = tokenize(&once.join(" "));
        assert_eq!(once, again);
    }
}
