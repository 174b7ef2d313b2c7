use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,

    /// Newline-delimited list of extra words to treat as correctly spelled.
    #[serde(default)]
    pub known_words: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            known_words: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > global config > defaults
    pub fn load(language: String, known_words: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Apply CLI overrides
        config.language = language;
        if known_words.is_some() {
            config.known_words = known_words;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.language != "en_US" {
            self.language = other.language;
        }
        if other.known_words.is_some() {
            self.known_words = other.known_words;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "altchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "altchk").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, "en_US");
        assert!(config.known_words.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            language: "en_GB".to_string(),
            known_words: Some(PathBuf::from("jargon.txt")),
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.language, "en_GB");
        assert_eq!(merged.known_words, Some(PathBuf::from("jargon.txt")));
    }
}
