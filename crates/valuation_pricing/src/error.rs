//! Facade-level error type.
//!
//! Every layer error converts into [`ValuationError`], so callers of the
//! facade see exactly three failure kinds: a parameter violated its
//! constraint, the contract is expired, or the requested model/exercise
//! combination is not implemented.

use thiserror::Error;

use valuation_core::MarketDataError;
use valuation_models::analytical::AnalyticalError;
use valuation_models::instruments::{ExerciseStyle, InstrumentError};

use crate::lattice::LatticeError;
use crate::mc::ConfigError;

/// Valuation request errors.
///
/// # Variants
/// - `InvalidParameter`: a request parameter violated its constraint; the
///   message names the parameter
/// - `ExpiredContract`: time to expiry was zero or negative
/// - `UnsupportedModelVariant`: the exercise style is not implemented
///   under the requested model
///
/// # Examples
/// ```
/// use valuation_models::instruments::ExerciseStyle;
/// use valuation_pricing::ValuationError;
///
/// let err = ValuationError::UnsupportedModelVariant {
///     model: "Simulation",
///     style: ExerciseStyle::American,
/// };
/// assert!(format!("{}", err).contains("American"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValuationError {
    /// A request parameter violated its constraint.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The contract is expired relative to the valuation date.
    #[error("Expired contract: {0}")]
    ExpiredContract(String),

    /// The requested exercise style is not implemented under the model.
    #[error("Unsupported model variant: {style} exercise under the {model} model")]
    UnsupportedModelVariant {
        /// Name of the requested pricing model
        model: &'static str,
        /// The unsupported exercise style
        style: ExerciseStyle,
    },
}

impl From<MarketDataError> for ValuationError {
    fn from(err: MarketDataError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}

impl From<InstrumentError> for ValuationError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidStrike { .. } => {
                ValuationError::InvalidParameter(err.to_string())
            }
            InstrumentError::ExpiredContract { .. } => {
                ValuationError::ExpiredContract(err.to_string())
            }
        }
    }
}

impl From<AnalyticalError> for ValuationError {
    fn from(err: AnalyticalError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}

impl From<LatticeError> for ValuationError {
    fn from(err: LatticeError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}

impl From<ConfigError> for ValuationError {
    fn from(err: ConfigError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}
