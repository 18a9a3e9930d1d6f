//! Significance reports for display and JSON export

use crate::error::Result;
use crate::significance::{assess, ConversionMethod, SignificanceConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Illustrative (TS, dof) pairs printed by the driver binary
///
/// The first two reach the same ~4.05 sigma from different TS values because
/// they carry different numbers of free parameters.
pub const SCENARIOS: [(f64, f64); 3] = [(25.0, 4.0), (19.8, 2.0), (10.0, 2.0)];

/// Outcome of one TS → sigma conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceReport {
    /// Test statistic
    pub ts: f64,

    /// Degrees of freedom
    pub dof: f64,

    /// Equivalent one-sided Gaussian significance
    pub sigma: f64,

    /// Formula that produced `sigma`
    pub method: ConversionMethod,
}

impl SignificanceReport {
    pub fn new(ts: f64, dof: f64, sigma: f64, method: ConversionMethod) -> Self {
        Self {
            ts,
            dof,
            sigma,
            method,
        }
    }

    /// Serialize report to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SignificanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TS = {} with {} dof -> {:.2} sigma ({})",
            self.ts, self.dof, self.sigma, self.method
        )
    }
}

/// Assess every entry of [`SCENARIOS`] with the default configuration
pub fn run_scenarios() -> Result<Vec<SignificanceReport>> {
    let config = SignificanceConfig::default();
    SCENARIOS
        .iter()
        .map(|&(ts, dof)| assess(ts, dof, &config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let report = SignificanceReport::new(25.0, 4.0, 4.054183, ConversionMethod::Exact);
        assert_eq!(
            report.to_string(),
            "TS = 25 with 4 dof -> 4.05 sigma (exact)"
        );
    }

    #[test]
    fn test_display_large_sample() {
        let report = SignificanceReport::new(
            2000.0,
            3.0,
            2000.0_f64.sqrt(),
            ConversionMethod::LargeSample,
        );
        assert_eq!(
            report.to_string(),
            "TS = 2000 with 3 dof -> 44.72 sigma (large-sample)"
        );
    }

    #[test]
    fn test_to_json_fields() {
        let report = SignificanceReport::new(19.8, 2.0, 4.054812, ConversionMethod::Exact);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ts"], 19.8);
        assert_eq!(value["dof"], 2.0);
        assert_eq!(value["method"], "exact");
        assert!((value["sigma"].as_f64().unwrap() - 4.05).abs() < 0.01);
    }

    #[test]
    fn test_run_scenarios() {
        let reports = run_scenarios().unwrap();
        assert_eq!(reports.len(), SCENARIOS.len());

        let sigmas: Vec<String> = reports.iter().map(|r| format!("{:.2}", r.sigma)).collect();
        assert_eq!(sigmas, ["4.05", "4.05", "2.71"]);
        assert!(reports
            .iter()
            .all(|r| r.method == ConversionMethod::Exact));
    }
}
