//! Error types for the binomial lattice engine.

use thiserror::Error;

/// Lattice pricing errors.
///
/// # Variants
/// - `InvalidStepCount`: step count outside [1, MAX_LATTICE_STEPS]
/// - `InvalidExpiry`: non-positive time to expiry
/// - `InvalidVolatility`: non-positive volatility
/// - `ProbabilityOutOfRange`: derived risk-neutral probability not in [0, 1]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Step count outside the valid range [1, `MAX_LATTICE_STEPS`].
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Non-positive time to expiry.
    #[error("Invalid time to expiry: T = {expiry}, must be positive")]
    InvalidExpiry {
        /// The rejected year fraction
        expiry: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: sigma = {volatility}, must be positive")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// The derived risk-neutral up-probability left [0, 1].
    ///
    /// Happens when the rate drift outruns the volatility spread over one
    /// time step (e^(r dt) outside [d, u]); more steps restore validity.
    #[error("Risk-neutral probability {p} is outside [0, 1]; increase the step count")]
    ProbabilityOutOfRange {
        /// The derived up-probability
        p: f64,
    },
}
