//! # valuation_core: Foundation Types for the Option Valuation Engine
//!
//! Bottom layer of the three-crate workspace, providing:
//! - Time types: `Date`, ACT/365 year fractions (`types::time`)
//! - Market inputs: `MarketInputs` (`market_data`)
//! - Error types: `DateError`, `MarketDataError` (`types::error`)
//!
//! This crate has no dependencies on the other valuation_* crates and builds
//! with stable Rust.
//!
//! ## Usage Examples
//!
//! ```rust
//! use valuation_core::types::time::{year_fraction, Date};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//! let yf = year_fraction(start, end);
//! assert!((yf - 182.0 / 365.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `MarketInputs`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;

pub use market_data::MarketInputs;
pub use types::error::{DateError, MarketDataError};
pub use types::time::Date;
