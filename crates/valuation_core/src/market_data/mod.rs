//! Market data records consumed by the pricing models.
//!
//! This module provides `MarketInputs`, the per-call bundle of observable
//! market quantities. Nothing here persists across valuation calls.

use crate::types::error::MarketDataError;

/// Per-call market inputs for a single valuation.
///
/// The bundle is ephemeral: every valuation is a pure function of the
/// contract, these inputs, and the valuation date.
///
/// # Fields
/// - `spot`: current underlying price (must be positive)
/// - `rate`: continuously compounded risk-free rate (negative allowed)
/// - `dividend_yield`: continuous dividend yield (negative allowed)
/// - `volatility`: annualised lognormal volatility (must be positive;
///   zero volatility is a degenerate boundary rejected up front rather
///   than divided through)
///
/// # Examples
/// ```
/// use valuation_core::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.0, 0.2);
/// assert!(market.validate().is_ok());
///
/// let bad = MarketInputs::new(100.0, 0.05, 0.0, 0.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Current underlying price (S).
    pub spot: f64,
    /// Continuously compounded risk-free rate (r), annualised.
    pub rate: f64,
    /// Continuous dividend yield (q), annualised.
    pub dividend_yield: f64,
    /// Annualised volatility (sigma).
    pub volatility: f64,
}

impl MarketInputs {
    /// Creates a new market input bundle.
    ///
    /// Validation is deferred to [`MarketInputs::validate`] so that records
    /// deserialised from the presentation layer can be constructed first
    /// and rejected with a descriptive error afterwards.
    pub fn new(spot: f64, rate: f64, dividend_yield: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Validates the inputs.
    ///
    /// # Errors
    /// - `MarketDataError::InvalidSpot` if `spot <= 0` or not finite
    /// - `MarketDataError::InvalidVolatility` if `volatility <= 0` or not finite
    /// - `MarketDataError::NotFinite` if rate or dividend yield is NaN/infinite
    pub fn validate(&self) -> Result<(), MarketDataError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(MarketDataError::InvalidSpot { spot: self.spot });
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(MarketDataError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !self.rate.is_finite() {
            return Err(MarketDataError::NotFinite {
                name: "rate",
                value: self.rate,
            });
        }
        if !self.dividend_yield.is_finite() {
            return Err(MarketDataError::NotFinite {
                name: "dividend_yield",
                value: self.dividend_yield,
            });
        }
        Ok(())
    }
}
