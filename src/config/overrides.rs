//! Environment variable overrides for configuration.

use crate::errors::Error;

use super::Config;
use super::env_parser;

#[cfg(test)]
use super::tests_utils::ENV_MUTEX;

/// Apply environment variable overrides to configuration.
pub fn apply_env_overrides(config: &mut Config) -> Result<(), Error> {
    env_parser::apply_confidence_gate_override(&mut config.confidence_gate)?;
    env_parser::apply_duplicate_threshold_override(&mut config.duplicate_threshold)?;
    env_parser::apply_similar_threshold_override(&mut config.similar_threshold)?;
    env_parser::apply_pending_limit_override(&mut config.pending_limit)?;
    env_parser::apply_weight_overrides(
        &mut config.levenshtein_weight,
        &mut config.jaccard_weight,
        &mut config.semantic_weight,
    )?;
    Ok(())
}
