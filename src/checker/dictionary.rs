use anyhow::{Context, Result};
use fst::automaton::Levenshtein;
use fst::{IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// FST-backed set of known words. Entries are stored lowercased so
/// membership checks are case-insensitive.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the dictionary for the given language from the data directory,
    /// bootstrapping an embedded wordlist if none is installed.
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::dictionary_path(language)?;

        if !dict_path.exists() {
            return Self::create_embedded(language);
        }

        Self::load_from_path(&dict_path)
    }

    /// Load a dictionary from a specific path (useful for testing)
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let reader = BufReader::new(file);
        let set = Set::new(reader.bytes().collect::<Result<Vec<_>, _>>()?)
            .context("Failed to parse dictionary")?;

        Ok(Self { set })
    }

    /// Build an in-memory dictionary from a word list.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        sorted.sort();
        sorted.dedup();

        let set = Set::from_iter(sorted).context("Failed to build dictionary set")?;
        Ok(Self { set })
    }

    /// Check for exact (case-insensitive) membership. Callers pass the
    /// word already lowercased.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// Check whether any entry lies within edit distance 1 of the word
    /// (one insertion, deletion, or substitution).
    pub fn contains_within_one(&self, word: &str) -> bool {
        match Levenshtein::new(word, 1) {
            Ok(lev) => self.set.search(lev).into_stream().next().is_some(),
            // Automaton construction only fails on pathological inputs;
            // fall back to exact membership.
            Err(_) => self.contains(word),
        }
    }

    /// Build an on-disk dictionary from a word list.
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted_words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        sorted_words.sort();
        sorted_words.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in sorted_words {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }

    pub(crate) fn dictionary_path(language: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir.join(format!("{}.dict", language)))
    }

    /// Create a minimal embedded dictionary for bootstrapping. A full
    /// wordlist can be installed with `altchk dict download <language>`.
    fn create_embedded(language: &str) -> Result<Self> {
        let basic_words = Self::basic_wordlist(language);

        let dict_path = Self::dictionary_path(language)?;
        Self::build_from_words(&basic_words, &dict_path)?;

        Self::load_from_path(&dict_path)
    }

    fn basic_wordlist(language: &str) -> Vec<String> {
        match language {
            "en_US" | "en_GB" => {
                // Most common English words plus terms that show up
                // constantly in alt text
                vec![
                    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for",
                    "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by",
                    "from", "they", "we", "say", "her", "she", "or", "an", "will", "my", "one",
                    "all", "would", "there", "their", "what", "so", "up", "out", "if", "about",
                    "who", "get", "which", "go", "me", "when", "make", "can", "like", "time", "no",
                    "just", "him", "know", "take", "people", "into", "year", "your", "good",
                    "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
                    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how",
                    "our", "work", "first", "well", "way", "even", "new", "want", "because",
                    "any", "these", "give", "day", "most", "us", "is", "was", "are", "were",
                    "test", "words", "misspelled",
                    // Alt text staples
                    "image", "picture", "photo", "photograph", "logo", "icon", "banner",
                    "screenshot", "diagram", "chart", "graph", "illustration", "thumbnail",
                    "avatar", "portrait", "map", "button", "arrow", "background", "drawing",
                    "person", "man", "woman", "child", "team", "group", "building", "street",
                    "showing", "standing", "wearing", "holding", "front", "left", "right",
                    "top", "bottom", "red", "blue", "green", "white", "black", "yellow",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect()
            }
            _ => {
                // Default to English wordlist for unknown languages
                [
                    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect()
            }
        }
    }
}

/// Levenshtein distance, used for fuzzy matching against the small
/// user-supplied known-words set where no FST is built.
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(a_len + 1) {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate().take(b_len + 1) {
        *item = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "world".to_string(), "test".to_string()];

        Dictionary::build_from_words(&words, &dict_path).unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("notfound"));
    }

    #[test]
    fn test_from_words_lowercases() {
        let dict = Dictionary::from_words(["Hello", "WORLD"]).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("Hello"));
    }

    #[test]
    fn test_fuzzy_membership() {
        let dict = Dictionary::from_words(["hello", "world"]).unwrap();
        assert!(dict.contains_within_one("hello")); // exact
        assert!(dict.contains_within_one("helo")); // deletion
        assert!(dict.contains_within_one("helloo")); // insertion
        assert!(dict.contains_within_one("hallo")); // substitution
        assert!(!dict.contains_within_one("hxllx")); // two edits away
        assert!(!dict.contains_within_one("xyzzy"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "hullo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("tset", "test"), 2);
    }
}
