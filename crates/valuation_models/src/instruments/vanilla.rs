//! Vanilla option contract.
//!
//! This module provides `VanillaOption`, the immutable contract entity
//! combining the right, underlying identifier, strike, calendar expiry,
//! and exercise style, together with its two primitives: time to expiry
//! and intrinsic payoff.

use std::fmt;

use valuation_core::types::time::{year_fraction, Date};

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::right::OptionRight;

/// Vanilla option contract.
///
/// Immutable once constructed. The contract carries calendar terms only;
/// market observables arrive per valuation call, so the same contract can
/// be revalued on any date against any market snapshot.
///
/// # Examples
/// ```
/// use valuation_core::types::time::Date;
/// use valuation_models::instruments::{ExerciseStyle, OptionRight, VanillaOption};
///
/// let option = VanillaOption::new(
///     OptionRight::Call,
///     "EURUSD",
///     1.1650,
///     Date::from_ymd(2026, 12, 31).unwrap(),
///     ExerciseStyle::European,
/// )
/// .unwrap();
///
/// assert!((option.payoff(1.1850) - 0.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption {
    right: OptionRight,
    underlying: String,
    strike: f64,
    expiry: Date,
    exercise: ExerciseStyle,
}

impl VanillaOption {
    /// Creates a new vanilla option contract.
    ///
    /// # Arguments
    /// * `right` - Call or Put
    /// * `underlying` - Opaque underlying asset identifier
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Calendar expiry date
    /// * `exercise` - European or American exercise
    ///
    /// # Errors
    /// Returns `InstrumentError::InvalidStrike` if `strike` is not a
    /// positive finite number.
    pub fn new(
        right: OptionRight,
        underlying: impl Into<String>,
        strike: f64,
        expiry: Date,
        exercise: ExerciseStyle,
    ) -> Result<Self, InstrumentError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            right,
            underlying: underlying.into(),
            strike,
            expiry,
            exercise,
        })
    }

    /// Returns the time to expiry as an ACT/365 year fraction.
    ///
    /// The valuation date is an explicit argument rather than the ambient
    /// clock, so the same contract yields reproducible results in tests.
    ///
    /// # Errors
    /// Returns `InstrumentError::ExpiredContract` when the year fraction is
    /// zero or negative; no pricing model accepts an expired horizon.
    ///
    /// # Examples
    /// ```
    /// use valuation_core::types::time::Date;
    /// use valuation_models::instruments::{ExerciseStyle, OptionRight, VanillaOption};
    ///
    /// let option = VanillaOption::new(
    ///     OptionRight::Put,
    ///     "EURUSD",
    ///     1.0,
    ///     Date::from_ymd(2026, 1, 1).unwrap(),
    ///     ExerciseStyle::European,
    /// )
    /// .unwrap();
    ///
    /// let as_of = Date::from_ymd(2025, 1, 1).unwrap();
    /// assert!((option.time_to_expiry(as_of).unwrap() - 1.0).abs() < 1e-12);
    ///
    /// let after = Date::from_ymd(2026, 6, 1).unwrap();
    /// assert!(option.time_to_expiry(after).is_err());
    /// ```
    pub fn time_to_expiry(&self, as_of: Date) -> Result<f64, InstrumentError> {
        let t = year_fraction(as_of, self.expiry);
        if t <= 0.0 {
            return Err(InstrumentError::ExpiredContract {
                expiry: self.expiry,
                as_of,
            });
        }
        Ok(t)
    }

    /// Returns the intrinsic payoff at the given spot.
    ///
    /// Call: max(0, S - K). Put: max(0, K - S). Pure, no side effects.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        match self.right {
            OptionRight::Call => (spot - self.strike).max(0.0),
            OptionRight::Put => (self.strike - spot).max(0.0),
        }
    }

    /// Returns the option right.
    #[inline]
    pub fn right(&self) -> OptionRight {
        self.right
    }

    /// Returns the underlying asset identifier.
    #[inline]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.expiry
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }
}

impl fmt::Display for VanillaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} exp {}",
            self.underlying, self.exercise, self.right, self.strike, self.expiry
        )
    }
}
