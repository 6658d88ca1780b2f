//! Configuration file loading and parsing.

use serde::Deserialize;

use crate::errors::Error;

/// Configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_confidence_gate")]
    pub confidence_gate: u32,

    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: f64,

    #[serde(default = "default_similar_threshold")]
    pub similar_threshold: f64,

    #[serde(default = "default_pending_limit")]
    pub pending_limit: usize,

    #[serde(default = "default_levenshtein_weight")]
    pub levenshtein_weight: f64,

    #[serde(default = "default_jaccard_weight")]
    pub jaccard_weight: f64,

    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f64,
}

fn default_confidence_gate() -> u32 {
    25
}

fn default_duplicate_threshold() -> f64 {
    0.8
}

fn default_similar_threshold() -> f64 {
    0.3
}

fn default_pending_limit() -> usize {
    50
}

fn default_levenshtein_weight() -> f64 {
    0.4
}

fn default_jaccard_weight() -> f64 {
    0.3
}

fn default_semantic_weight() -> f64 {
    0.3
}

/// Load configuration from TOML file.
pub fn load_from_file() -> Result<Option<ConfigFile>, Error> {
    let home = dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let config_dir = dirs::config_dir().unwrap_or_else(|| home.join(".config"));

    let config_path = config_dir.join("bosun/config.toml");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {e}",
                config_path.display()
            ))
        })?;

        let config: ConfigFile = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(Some(config))
    } else {
        Ok(None)
    }
}
