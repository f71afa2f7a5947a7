use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Tunables of the recommendation engine.
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// per_country_cap = 8
/// cold_start_score = 0.10
/// max_features = 6000
/// ngram_min = 1
/// ngram_max = 2
/// english_stop_words = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum suggestions kept per country
    pub per_country_cap: usize,
    /// Placeholder score attached to every cold-start suggestion
    pub cold_start_score: f64,
    /// Vocabulary cap of the shared term space
    pub max_features: usize,
    /// Smallest n-gram length extracted from a document
    pub ngram_min: usize,
    /// Largest n-gram length extracted from a document
    pub ngram_max: usize,
    /// Drop common English words before building n-grams
    pub english_stop_words: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            per_country_cap: 8,
            cold_start_score: 0.10,
            max_features: 6000,
            ngram_min: 1,
            ngram_max: 2,
            english_stop_words: true,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.per_country_cap == 0 {
            return Err(RecommendError::config("per_country_cap must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.cold_start_score) {
            return Err(RecommendError::config("cold_start_score must lie in [0, 1]"));
        }
        if self.max_features == 0 {
            return Err(RecommendError::config("max_features must be at least 1"));
        }
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(RecommendError::config(format!(
                "invalid ngram range {}..={}",
                self.ngram_min, self.ngram_max
            )));
        }
        Ok(())
    }
}
