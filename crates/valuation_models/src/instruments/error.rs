//! Error types for contract construction and time calculations.

use thiserror::Error;
use valuation_core::types::time::Date;

/// Contract-level errors.
///
/// # Variants
/// - `InvalidStrike`: non-positive strike at construction
/// - `ExpiredContract`: non-positive time to expiry at valuation
///
/// # Examples
/// ```
/// use valuation_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -1.0 };
/// assert!(format!("{}", err).contains("strike"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Non-positive strike price.
    #[error("Invalid strike price: K = {strike}, must be positive")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Contract has expired relative to the valuation date.
    #[error("Contract expired: expiry {expiry} is on or before valuation date {as_of}")]
    ExpiredContract {
        /// Contract expiry date
        expiry: Date,
        /// Valuation date the contract was checked against
        as_of: Date,
    },
}
