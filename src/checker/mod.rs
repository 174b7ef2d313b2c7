pub mod dictionary;
pub mod tokenizer;

use crate::{Config, TypoFinding};
use anyhow::{Context, Result};
use dictionary::Dictionary;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct SpellChecker {
    dictionary: Dictionary,
    known_words: HashSet<String>,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = Dictionary::load(&config.language)?;
        let mut checker = Self::with_dictionary(dictionary);

        if let Some(path) = &config.known_words {
            checker.add_known_words_file(path)?;
        }

        Ok(checker)
    }

    /// Construct a checker around an explicit dictionary (useful for
    /// testing without touching the data directory).
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            known_words: HashSet::new(),
        }
    }

    /// Merge a newline-delimited word list into the known-words set.
    /// Strictly additive; built-in dictionary entries are never removed.
    pub fn add_known_words_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read known-words file: {}", path.display()))?;
        for line in content.lines() {
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                self.known_words.insert(word.to_lowercase());
            }
        }
        Ok(())
    }

    pub fn add_known_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.known_words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check alt text for potential typos. Returns a finding listing the
    /// unmatched tokens, or `None` when every token is recognized.
    pub fn check_text(&self, text: &str) -> Option<TypoFinding> {
        let mut words = Vec::new();
        let mut seen = HashSet::new();

        for token in tokenizer::tokenize(text) {
            if self.should_ignore(&token) {
                continue;
            }

            let lower = token.to_lowercase();
            if seen.contains(&lower) {
                continue;
            }

            if self.is_recognized(&lower) {
                continue;
            }

            seen.insert(lower);
            words.push(token);
        }

        if words.is_empty() {
            None
        } else {
            Some(TypoFinding {
                words,
                original_text: text.to_string(),
            })
        }
    }

    /// A token is recognized if it is within edit distance 1 of a
    /// dictionary entry or a user-supplied known word.
    fn is_recognized(&self, lower: &str) -> bool {
        if self.known_words.contains(lower) {
            return true;
        }

        if self.dictionary.contains(lower) || self.dictionary.contains_within_one(lower) {
            return true;
        }

        self.known_words
            .iter()
            .any(|known| dictionary::edit_distance(lower, known) <= 1)
    }

    fn should_ignore(&self, token: &str) -> bool {
        // Single characters and bare numbers are never typos
        if token.chars().count() <= 1 {
            return true;
        }

        token.chars().all(|c| c.is_numeric())
    }
}
