//! Configuration validation logic.

use crate::errors::Error;

use super::MAX_PENDING_LIMIT;

/// How far the three algorithm weights may drift from summing to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Validates configuration values.
pub struct ConfigValidator {
    pub confidence_gate: u32,
    pub duplicate_threshold: f64,
    pub similar_threshold: f64,
    pub pending_limit: usize,
    pub levenshtein_weight: f64,
    pub jaccard_weight: f64,
    pub semantic_weight: f64,
}

impl ConfigValidator {
    /// Validate all configuration values for correctness and constraints.
    ///
    /// Checks that:
    /// - Similarity thresholds are between 0.0 and 1.0
    /// - The confidence gate is at most 100
    /// - The pending limit is between 1 and `MAX_PENDING_LIMIT`
    /// - Each algorithm weight is between 0.0 and 1.0
    /// - The weights sum to 1.0 within tolerance
    /// - No NaN or infinite values
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any validation check fails.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_threshold("duplicate threshold", self.duplicate_threshold)?;
        self.validate_threshold("similar threshold", self.similar_threshold)?;
        self.validate_confidence_gate()?;
        self.validate_pending_limit()?;
        self.validate_weights()?;

        Ok(())
    }

    fn validate_threshold(&self, name: &str, value: f64) -> Result<(), Error> {
        if value.is_nan() || value.is_infinite() {
            return Err(Error::Config(format!(
                "Invalid {name}: NaN and infinity are not allowed"
            )));
        }

        if !(0.0..=1.0).contains(&value) {
            return Err(Error::Config(format!(
                "Invalid {name}: {value} (must be between 0.0 and 1.0)"
            )));
        }

        Ok(())
    }

    fn validate_confidence_gate(&self) -> Result<(), Error> {
        if self.confidence_gate > 100 {
            return Err(Error::Config(format!(
                "Invalid confidence gate: {} (must be between 0 and 100)",
                self.confidence_gate
            )));
        }
        Ok(())
    }

    fn validate_pending_limit(&self) -> Result<(), Error> {
        if self.pending_limit == 0 || self.pending_limit > MAX_PENDING_LIMIT {
            return Err(Error::Config(format!(
                "Invalid pending limit: {} (must be between 1 and {})",
                self.pending_limit, MAX_PENDING_LIMIT
            )));
        }
        Ok(())
    }

    fn validate_weights(&self) -> Result<(), Error> {
        let weights = [
            ("levenshtein weight", self.levenshtein_weight),
            ("jaccard weight", self.jaccard_weight),
            ("semantic weight", self.semantic_weight),
        ];

        for (name, value) in weights {
            if value.is_nan() || value.is_infinite() {
                return Err(Error::Config(format!(
                    "Invalid {name}: NaN and infinity are not allowed"
                )));
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "Invalid {name}: {value} (must be between 0.0 and 1.0)"
                )));
            }
        }

        let sum = self.levenshtein_weight + self.jaccard_weight + self.semantic_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::Config(format!(
                "Algorithm weights sum to {sum}, must sum to 1.0"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ConfigValidator {
        ConfigValidator {
            confidence_gate: 25,
            duplicate_threshold: 0.8,
            similar_threshold: 0.3,
            pending_limit: 50,
            levenshtein_weight: 0.4,
            jaccard_weight: 0.3,
            semantic_weight: 0.3,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        valid().validate().unwrap();
    }

    #[test]
    fn test_threshold_out_of_range() {
        let mut v = valid();
        v.duplicate_threshold = 1.5;
        assert!(matches!(v.validate(), Err(Error::Config(_))));

        let mut v = valid();
        v.similar_threshold = -0.1;
        assert!(matches!(v.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_threshold_nan_rejected() {
        let mut v = valid();
        v.duplicate_threshold = f64::NAN;
        assert!(matches!(v.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_confidence_gate_over_100_rejected() {
        let mut v = valid();
        v.confidence_gate = 101;
        assert!(matches!(v.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_pending_limit_bounds() {
        let mut v = valid();
        v.pending_limit = 0;
        assert!(matches!(v.validate(), Err(Error::Config(_))));

        let mut v = valid();
        v.pending_limit = MAX_PENDING_LIMIT + 1;
        assert!(matches!(v.validate(), Err(Error::Config(_))));

        let mut v = valid();
        v.pending_limit = MAX_PENDING_LIMIT;
        v.validate().unwrap();
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut v = valid();
        v.levenshtein_weight = 0.5;
        // 0.5 + 0.3 + 0.3 = 1.1
        assert!(matches!(v.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        let mut v = valid();
        v.semantic_weight = -0.3;
        assert!(matches!(v.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_weight_sum_within_tolerance() {
        let mut v = valid();
        v.levenshtein_weight = 0.405;
        v.jaccard_weight = 0.3;
        v.semantic_weight = 0.3;
        v.validate().unwrap();
    }
}
