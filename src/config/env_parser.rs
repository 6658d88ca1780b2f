//! Environment variable parsing utilities for configuration.

use crate::errors::Error;

/// Parse environment variable as a f64.
fn parse_env_float(name: &str, value: &str) -> Result<f64, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

/// Parse environment variable as a u32.
fn parse_env_u32(name: &str, value: &str) -> Result<u32, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

/// Parse environment variable as a usize.
fn parse_env_usize(name: &str, value: &str) -> Result<usize, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

/// Apply BOSUN_CONFIDENCE_GATE environment variable override.
pub fn apply_confidence_gate_override(confidence_gate: &mut u32) -> Result<(), Error> {
    if let Ok(val) = std::env::var("BOSUN_CONFIDENCE_GATE") {
        *confidence_gate = parse_env_u32("BOSUN_CONFIDENCE_GATE", &val)?;
    }
    Ok(())
}

/// Apply BOSUN_DUPLICATE_THRESHOLD environment variable override.
pub fn apply_duplicate_threshold_override(duplicate_threshold: &mut f64) -> Result<(), Error> {
    if let Ok(val) = std::env::var("BOSUN_DUPLICATE_THRESHOLD") {
        *duplicate_threshold = parse_env_float("BOSUN_DUPLICATE_THRESHOLD", &val)?;
    }
    Ok(())
}

/// Apply BOSUN_SIMILAR_THRESHOLD environment variable override.
pub fn apply_similar_threshold_override(similar_threshold: &mut f64) -> Result<(), Error> {
    if let Ok(val) = std::env::var("BOSUN_SIMILAR_THRESHOLD") {
        *similar_threshold = parse_env_float("BOSUN_SIMILAR_THRESHOLD", &val)?;
    }
    Ok(())
}

/// Apply BOSUN_PENDING_LIMIT environment variable override.
pub fn apply_pending_limit_override(pending_limit: &mut usize) -> Result<(), Error> {
    if let Ok(val) = std::env::var("BOSUN_PENDING_LIMIT") {
        *pending_limit = parse_env_usize("BOSUN_PENDING_LIMIT", &val)?;
    }
    Ok(())
}

/// Apply the BOSUN_*_WEIGHT environment variable overrides.
pub fn apply_weight_overrides(
    levenshtein_weight: &mut f64,
    jaccard_weight: &mut f64,
    semantic_weight: &mut f64,
) -> Result<(), Error> {
    if let Ok(val) = std::env::var("BOSUN_LEVENSHTEIN_WEIGHT") {
        *levenshtein_weight = parse_env_float("BOSUN_LEVENSHTEIN_WEIGHT", &val)?;
    }
    if let Ok(val) = std::env::var("BOSUN_JACCARD_WEIGHT") {
        *jaccard_weight = parse_env_float("BOSUN_JACCARD_WEIGHT", &val)?;
    }
    if let Ok(val) = std::env::var("BOSUN_SEMANTIC_WEIGHT") {
        *semantic_weight = parse_env_float("BOSUN_SEMANTIC_WEIGHT", &val)?;
    }
    Ok(())
}
