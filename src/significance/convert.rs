// TS → sigma conversion using statrs distributions
//
// Exact path: halve the chi-squared upper tail (one-sided convention) and
// invert it through the standard normal survival function.
// Large-sample path: sigma = sqrt(TS), used once the tail probability is too
// small for f64 to carry.

use crate::error::{Result, SignificanceError};
use crate::report::SignificanceReport;
use crate::significance::config::SignificanceConfig;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::erf::erf_inv;
use statrs::function::gamma::{checked_gamma_lr, checked_gamma_ur, ln_gamma};
use statrs::prec::DEFAULT_F64_ACC;
use statrs::StatsError;
use std::f64::consts::{LN_2, SQRT_2};

/// Which formula produced a sigma value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    /// Chi-squared survival function halved, then the normal inverse survival function
    Exact,

    /// `sqrt(TS)`
    LargeSample,
}

impl std::fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMethod::Exact => write!(f, "exact"),
            ConversionMethod::LargeSample => write!(f, "large-sample"),
        }
    }
}

/// Convert a test statistic into an equivalent one-sided Gaussian significance
///
/// # Arguments
/// * `ts` - Likelihood-ratio test statistic, non-negative
/// * `dof` - Degrees of freedom, a positive integral value
///
/// # Example
/// ```
/// use ts_significance::significance::convert;
///
/// let sigma = convert(25.0, 4.0).unwrap();
/// assert!((sigma - 4.05).abs() < 0.01);
///
/// assert!(convert(-1.0, 4.0).is_err());
/// assert!(convert(25.0, 2.5).is_err());
/// ```
pub fn convert(ts: f64, dof: f64) -> Result<f64> {
    convert_with_config(ts, dof, &SignificanceConfig::default())
}

/// Same as [`convert`] with an explicit large-TS threshold
pub fn convert_with_config(ts: f64, dof: f64, config: &SignificanceConfig) -> Result<f64> {
    assess(ts, dof, config).map(|report| report.sigma)
}

/// Convert and record which formula was used
pub fn assess(ts: f64, dof: f64, config: &SignificanceConfig) -> Result<SignificanceReport> {
    validate_inputs(ts, dof)?;
    config
        .validate()
        .map_err(SignificanceError::InvalidArgument)?;

    if ts > config.large_ts_threshold {
        tracing::debug!(
            "TS {} above threshold {}, using sqrt(TS)",
            ts,
            config.large_ts_threshold
        );
        return Ok(SignificanceReport::new(
            ts,
            dof,
            ts.sqrt(),
            ConversionMethod::LargeSample,
        ));
    }

    let report = match exact_sigma(ts, dof)? {
        Some(sigma) => {
            tracing::debug!("TS {} with {} dof -> {} sigma (exact)", ts, dof, sigma);
            SignificanceReport::new(ts, dof, sigma, ConversionMethod::Exact)
        }
        None => {
            tracing::warn!(
                "Chi-squared tail underflowed for TS {} with {} dof, falling back to sqrt(TS)",
                ts,
                dof
            );
            SignificanceReport::new(ts, dof, ts.sqrt(), ConversionMethod::LargeSample)
        }
    };

    Ok(report)
}

fn validate_inputs(ts: f64, dof: f64) -> Result<()> {
    if !ts.is_finite() {
        return Err(SignificanceError::invalid(format!(
            "TS must be a finite number, got {}",
            ts
        )));
    }

    if ts < 0.0 {
        return Err(SignificanceError::invalid(format!(
            "TS must be non-negative, got {}",
            ts
        )));
    }

    if dof <= 0.0 {
        return Err(SignificanceError::invalid(format!(
            "dof must be positive, got {}",
            dof
        )));
    }

    // NaN and +inf have a NaN fractional part
    if dof.fract() != 0.0 {
        return Err(SignificanceError::invalid(format!(
            "dof must be an integer, got {}",
            dof
        )));
    }

    Ok(())
}

/// Exact sigma, or `None` when the tail probability underflows to zero
///
/// With `a = dof / 2` and `x = TS / 2` the chi-squared upper tail is the
/// regularized gamma Q(a, x). Up to the bulk of the distribution (`x <= a`)
/// sigma comes from the lower tail P(a, x) instead, since forming 1 - P would
/// erase how far the one-sided tail sits below 0.5.
fn exact_sigma(ts: f64, dof: f64) -> Result<Option<f64>> {
    let a = dof / 2.0;
    let x = ts / 2.0;

    let sigma = if x <= a {
        let lower = lower_tail(ts, a)?;
        if !(0.0..=1.0).contains(&lower) {
            return Err(unrepresentable(ts, dof));
        }

        // isf((1 - P) / 2) = sqrt(2) * erf⁻¹(P)
        SQRT_2 * erf_inv(lower)
    } else {
        let tail = checked_gamma_ur(a, x).map_err(|e| gamma_error(ts, dof, e))? / 2.0;
        if !(0.0..=1.0).contains(&tail) {
            return Err(unrepresentable(ts, dof));
        }
        if tail == 0.0 {
            return Ok(None);
        }

        // isf(p) = -cdf⁻¹(p); going through cdf⁻¹(1 - p) would round 1 - p to 1.0
        // for any p below f64::EPSILON.
        -Normal::standard().inverse_cdf(tail)
    };

    if !sigma.is_finite() {
        return Err(unrepresentable(ts, dof));
    }

    // Both tails put sigma at or above zero, so abs() only folds -0.0
    Ok(Some(sigma.abs()))
}

/// Lower regularized gamma P(dof / 2, TS / 2)
///
/// statrs snaps P to zero once x is within `DEFAULT_F64_ACC` of zero. There the
/// leading series term x^a e^-x / Γ(a + 1) already equals P to f64 precision.
/// It is evaluated in log space from `ts` itself because `ts / 2` underflows
/// to zero for the smallest subnormal TS.
fn lower_tail(ts: f64, a: f64) -> Result<f64> {
    let x = ts / 2.0;
    if x <= DEFAULT_F64_ACC {
        let ln_x = ts.ln() - LN_2;
        return Ok((a * ln_x - x - ln_gamma(a + 1.0)).exp());
    }

    checked_gamma_lr(a, x).map_err(|e| gamma_error(ts, 2.0 * a, e))
}

fn gamma_error(ts: f64, dof: f64, e: StatsError) -> SignificanceError {
    SignificanceError::invalid(format!("TS {} with {} dof: {}", ts, dof, e))
}

/// Inputs passed validation but the tail probability overflowed into NaN/inf
fn unrepresentable(ts: f64, dof: f64) -> SignificanceError {
    SignificanceError::invalid(format!(
        "chi-squared tail for TS {} with {} dof is not representable as f64",
        ts, dof
    ))
}
