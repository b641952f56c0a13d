//! Configuration errors.
//!
//! The search itself cannot fail; these are only produced by
//! [`DividerConfig::validate`](crate::DividerConfig::validate) for setups that are guaranteed
//! to produce no results.

use thiserror::Error;

/// Problems detected in a [`DividerConfig`](crate::DividerConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A quantity that must be strictly positive is not
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    /// The R23 range contains no values
    #[error("R23 range is empty: min {min} is above max {max}")]
    EmptyRange { min: f64, max: f64 },

    /// The divider output is always above its reference, even at the top of the tolerance band
    #[error("target {target}V is below the reference voltage {v_ref}V")]
    TargetBelowReference { target: f64, v_ref: f64 },

    /// Adding R3 always lowers the output, so the lower target's band must start below the top
    /// of the higher target's band
    #[error("lower target {lower}V cannot be reached below the higher target {higher}V")]
    TargetsNotOrdered { lower: f64, higher: f64 },

    #[error("resistor series has no values")]
    EmptySeries,

    #[error("no decade exponents configured")]
    NoDecades,

    /// Series values are mantissas for a single decade
    #[error("series value {value} is outside [1, 10)")]
    MantissaOutOfRange { value: f64 },
}
