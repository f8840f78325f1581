//! Core type definitions.
//!
//! This module provides:
//! - `time`: Date wrapper and ACT/365 year fraction calculations
//! - `error`: Structured error types for the foundation layer

pub mod error;
pub mod time;

pub use error::{DateError, MarketDataError};
pub use time::Date;
