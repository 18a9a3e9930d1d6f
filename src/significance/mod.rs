// Test Statistic → Gaussian significance conversion
//
// A likelihood-ratio test statistic TS with `dof` free parameters follows a
// chi-squared distribution under the null hypothesis (Wilks' theorem). The
// equivalent significance is the standard normal deviate whose one-sided
// upper tail equals half the chi-squared upper tail at TS.
//
// For TS > 1400 the tail falls below ~1e-300 and sigma = sqrt(TS) is used.

mod config;
mod convert;

pub use config::{SignificanceConfig, DEFAULT_LARGE_TS_THRESHOLD};
pub use convert::{assess, convert, convert_with_config, ConversionMethod};
