//! Closed-form analytical pricing.
//!
//! This module provides:
//! - `distributions`: standard normal CDF/PDF
//! - `BlackScholes`: closed-form prices and Greeks for European options
//! - `AnalyticalError`: errors specific to the closed-form model

pub mod distributions;

mod black_scholes;
mod error;

pub use black_scholes::{BlackScholes, Greeks};
pub use error::AnalyticalError;
