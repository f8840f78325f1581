//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `MarketDataError`: Errors from market input validation

use std::fmt;
use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use valuation_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Market input validation errors.
///
/// Each variant names the offending parameter and carries the rejected
/// value, so the caller-visible message identifies which constraint
/// was violated.
///
/// # Examples
/// ```
/// use valuation_core::types::MarketDataError;
///
/// let err = MarketDataError::InvalidSpot { spot: -1.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketDataError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}, must be positive")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: sigma = {volatility}, must be positive")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Non-finite rate or dividend yield.
    #[error("Invalid {name}: {value} is not finite")]
    NotFinite {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
    }

    #[test]
    fn test_date_error_parse_error_display() {
        let err = DateError::ParseError("invalid format".to_string());
        assert_eq!(format!("{}", err), "Date parse error: invalid format");
    }

    #[test]
    fn test_date_error_trait_implementation() {
        let err = DateError::ParseError("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_market_data_error_display() {
        let err = MarketDataError::InvalidSpot { spot: -100.0 };
        assert_eq!(
            format!("{}", err),
            "Invalid spot price: S = -100, must be positive"
        );

        let err = MarketDataError::InvalidVolatility { volatility: 0.0 };
        assert!(format!("{}", err).contains("sigma = 0"));

        let err = MarketDataError::NotFinite {
            name: "rate",
            value: f64::NAN,
        };
        assert!(format!("{}", err).contains("rate"));
    }

    #[test]
    fn test_market_data_error_clone_and_equality() {
        let err1 = MarketDataError::InvalidSpot { spot: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
