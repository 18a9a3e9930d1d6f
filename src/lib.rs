//! ts-significance - Gaussian significance from likelihood-ratio test statistics
//!
//! Converts a test statistic (TS) and its degrees of freedom into the
//! equivalent one-sided Gaussian significance used when reporting gamma-ray
//! source detections.

pub mod error;
pub mod report;
pub mod significance;

pub use error::{Result, SignificanceError};
pub use report::SignificanceReport;
pub use significance::{convert, ConversionMethod, SignificanceConfig};
