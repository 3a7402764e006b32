//! Configuration loading and management for precis.
//!
//! Loads settings from `precis.toml` with environment variable overrides.
//! Every section is optional; missing values fall back to the defaults.

use crate::frequency::{Cutoffs, DEFAULT_MAX_CUT, DEFAULT_MIN_CUT};
use crate::ranker::SentenceOrder;
use crate::stopwords::StopwordSet;
use crate::summarizer::{Summarizer, SummarizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "precis.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),
}

/// Summarizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Words with normalized frequency at or below this are ignored
    pub min_cut: f64,
    /// Words with normalized frequency at or above this are ignored
    pub max_cut: f64,
    /// Stopword language (e.g., "en", "german")
    pub language: String,
    /// Additional words to ignore
    pub extra_stopwords: Vec<String>,
    /// Output order of the selected sentences
    pub order: SentenceOrder,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of sentences in a summary
    pub sentences: usize,
}

/// HTTP settings for fetching webpages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub summarizer: SummarizerConfig,
    pub output: OutputConfig,
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from the default location (precis.toml in cwd or home).
    ///
    /// Without a config file the defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Override settings from `PRECIS_LANGUAGE` and `PRECIS_SENTENCES`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup("PRECIS_LANGUAGE") {
            self.summarizer.language = language;
        }
        if let Some(value) = lookup("PRECIS_SENTENCES") {
            self.output.sentences = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PRECIS_SENTENCES".to_string(),
                value: value.clone(),
            })?;
        }
        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("precis")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    /// Build a summarizer from the configured settings
    pub fn summarizer(&self) -> Result<Summarizer, ConfigError> {
        let settings = &self.summarizer;
        let cutoffs = Cutoffs::new(settings.min_cut, settings.max_cut)?;
        let stopwords = StopwordSet::for_language(&settings.language)
            .with_words(&settings.extra_stopwords);

        Ok(Summarizer::with_cutoffs(cutoffs)
            .with_stopwords(stopwords)
            .with_order(settings.order))
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_cut: DEFAULT_MIN_CUT,
            max_cut: DEFAULT_MAX_CUT,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            order: SentenceOrder::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { sentences: 3 }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!(
                "precis/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/cladam/precis)"
            )
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.summarizer.min_cut, 0.1);
        assert_eq!(config.summarizer.max_cut, 0.9);
        assert_eq!(config.summarizer.language, "en");
        assert_eq!(config.summarizer.order, SentenceOrder::Document);
        assert_eq!(config.output.sentences, 3);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
        assert!(config.fetch.user_agent.starts_with("precis/"));
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
[summarizer]
max_cut = 0.8
order = "score"
extra_stopwords = ["said"]

[output]
sentences = 5
"#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.summarizer.min_cut, 0.1);
        assert_eq!(config.summarizer.max_cut, 0.8);
        assert_eq!(config.summarizer.order, SentenceOrder::Score);
        assert_eq!(config.summarizer.extra_stopwords, vec!["said"]);
        assert_eq!(config.output.sentences, 5);
        assert_eq!(config.fetch.timeout_secs, 30);

        let summarizer = config.summarizer().unwrap();
        assert_eq!(summarizer.cutoffs().max(), 0.8);
        assert_eq!(summarizer.order(), SentenceOrder::Score);
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[summarizer]\nmin_cut = \"low\"\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_invalid_cutoffs_rejected_when_building() {
        let file = write_config("[summarizer]\nmin_cut = 0.9\nmax_cut = 0.1\n");
        let config = Config::load_from(file.path()).unwrap();
        assert!(matches!(
            config.summarizer(),
            Err(ConfigError::Summarizer(
                SummarizerError::InvalidConfiguration { .. }
            ))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("PRECIS_LANGUAGE", "de"), ("PRECIS_SENTENCES", " 7 ")]);
        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.summarizer.language, "de");
        assert_eq!(config.output.sentences, 7);
    }

    #[test]
    fn test_invalid_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "PRECIS_SENTENCES").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(config.output.sentences, 3);
    }
}
