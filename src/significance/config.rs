// Configuration for TS → sigma conversion

use serde::{Deserialize, Serialize};

/// Test statistic above which sigma is taken as `sqrt(TS)`
pub const DEFAULT_LARGE_TS_THRESHOLD: f64 = 1400.0;

/// Configuration for significance conversion
///
/// # Example
/// ```
/// use ts_significance::significance::SignificanceConfig;
///
/// let config = SignificanceConfig::default();
/// assert_eq!(config.large_ts_threshold, 1400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    /// Switch to the large-sample approximation when `TS` exceeds this value
    ///
    /// Beyond it the chi-squared tail probability approaches the smallest
    /// representable `f64` and the exact path loses all precision.
    ///
    /// Default: 1400
    pub large_ts_threshold: f64,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            large_ts_threshold: DEFAULT_LARGE_TS_THRESHOLD,
        }
    }
}

impl SignificanceConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.large_ts_threshold.is_finite() || self.large_ts_threshold < 0.0 {
            return Err(format!(
                "large_ts_threshold must be finite and non-negative, got {}",
                self.large_ts_threshold
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignificanceConfig::default();
        assert_eq!(config.large_ts_threshold, 1400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = SignificanceConfig {
            large_ts_threshold: -1.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        for threshold in [f64::NAN, f64::INFINITY] {
            let config = SignificanceConfig {
                large_ts_threshold: threshold,
            };
            assert!(config.validate().is_err(), "{} accepted", threshold);
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SignificanceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SignificanceConfig::default());

        let config: SignificanceConfig =
            serde_json::from_str(r#"{"large_ts_threshold": 900.0}"#).unwrap();
        assert_eq!(config.large_ts_threshold, 900.0);
    }
}
