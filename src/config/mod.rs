//! Configuration system for bosun.

mod env_parser;
mod loader;
mod overrides;
pub(crate) mod paths;
mod validation;

#[cfg(test)]
mod tests_utils;
#[cfg(test)]
use tests_utils::ENV_MUTEX;

use serde::Deserialize;

use crate::errors::Error;
use crate::similarity::BlendWeights;

pub use loader::ConfigFile;

/// Upper bound on the candidate set handed to a duplicate scan.
pub const MAX_PENDING_LIMIT: usize = 10_000;

/// Configuration values with priority: defaults < config file < env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Minimum score before a message triggers any user-visible action.
    #[serde(default)]
    pub confidence_gate: u32,

    /// Similarity threshold for creation-time duplicate checks.
    #[serde(default)]
    pub duplicate_threshold: f64,

    /// Similarity floor for exploratory find-similar searches.
    #[serde(default)]
    pub similar_threshold: f64,

    /// How many pending candidates to compare against per message.
    #[serde(default)]
    pub pending_limit: usize,

    /// Blend weight of edit-distance similarity.
    #[serde(default)]
    pub levenshtein_weight: f64,

    /// Blend weight of keyword-set overlap.
    #[serde(default)]
    pub jaccard_weight: f64,

    /// Blend weight of frequency-weighted term overlap.
    #[serde(default)]
    pub semantic_weight: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            confidence_gate: 25,
            duplicate_threshold: 0.8,
            similar_threshold: 0.3,
            pending_limit: 50,
            levenshtein_weight: 0.4,
            jaccard_weight: 0.3,
            semantic_weight: 0.3,
        }
    }
}

impl Config {
    /// Load configuration with defaults, file values, and environment
    /// overrides.
    pub fn load() -> Result<Self, Error> {
        let file_config = loader::load_from_file()?;

        let mut config = Config::default();

        if let Some(file) = file_config {
            config.merge_from_file(file);
        }

        overrides::apply_env_overrides(&mut config)?;

        config.validate()?;

        Ok(config)
    }

    /// The algorithm weight set this configuration describes.
    pub fn blend_weights(&self) -> BlendWeights {
        BlendWeights {
            levenshtein: self.levenshtein_weight,
            jaccard: self.jaccard_weight,
            semantic: self.semantic_weight,
        }
    }

    /// Merge configuration from a file into this config.
    fn merge_from_file(&mut self, file: ConfigFile) {
        self.confidence_gate = file.confidence_gate;
        self.duplicate_threshold = file.duplicate_threshold;
        self.similar_threshold = file.similar_threshold;
        self.pending_limit = file.pending_limit;
        self.levenshtein_weight = file.levenshtein_weight;
        self.jaccard_weight = file.jaccard_weight;
        self.semantic_weight = file.semantic_weight;
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), Error> {
        let validator = validation::ConfigValidator {
            confidence_gate: self.confidence_gate,
            duplicate_threshold: self.duplicate_threshold,
            similar_threshold: self.similar_threshold,
            pending_limit: self.pending_limit,
            levenshtein_weight: self.levenshtein_weight,
            jaccard_weight: self.jaccard_weight,
            semantic_weight: self.semantic_weight,
        };

        validator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleanup_env_vars() {
        tests_utils::cleanup_env_vars(&[
            "BOSUN_CONFIDENCE_GATE",
            "BOSUN_DUPLICATE_THRESHOLD",
            "BOSUN_SIMILAR_THRESHOLD",
            "BOSUN_PENDING_LIMIT",
            "BOSUN_LEVENSHTEIN_WEIGHT",
            "BOSUN_JACCARD_WEIGHT",
            "BOSUN_SEMANTIC_WEIGHT",
        ]);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.confidence_gate, 25);
        assert_eq!(config.duplicate_threshold, 0.8);
        assert_eq!(config.similar_threshold, 0.3);
        assert_eq!(config.pending_limit, 50);
        assert_eq!(config.levenshtein_weight, 0.4);
        assert_eq!(config.jaccard_weight, 0.3);
        assert_eq!(config.semantic_weight, 0.3);
    }

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_config_load_without_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars();

        let config = Config::load().unwrap();

        assert_eq!(config.confidence_gate, 25);
        assert_eq!(config.duplicate_threshold, 0.8);
        assert_eq!(config.pending_limit, 50);
    }

    #[test]
    fn test_blend_weights_mirror_config() {
        let mut config = Config::default();
        config.levenshtein_weight = 0.5;
        config.jaccard_weight = 0.25;
        config.semantic_weight = 0.25;

        let weights = config.blend_weights();
        assert_eq!(weights.levenshtein, 0.5);
        assert_eq!(weights.jaccard, 0.25);
        assert_eq!(weights.semantic, 0.25);
    }
}
