//! # valuation_pricing: Numerical Engines and Valuation Facade
//!
//! Engine layer of the valuation workspace.
//!
//! This crate provides:
//! - `lattice`: Cox-Ross-Rubinstein binomial tree (European and American)
//! - `mc`: Monte Carlo simulation engine with reproducible parallel paths
//! - `rng`: seeded random number generation
//! - `valuation`: the facade that validates a request, dispatches to one
//!   pricing model, and assembles the output record
//!
//! ## Design Principles
//!
//! - **Enum-based model dispatch**: the model selector is an exhaustively
//!   matched enum, so adding a model is a compile-time-checked change
//! - **Injected ambient state**: the valuation date and the random seed are
//!   explicit inputs, never read from process-global state
//! - **Validate before pricing**: every request is checked up front; no
//!   partial computation can leak a value derived from bad inputs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod lattice;
pub mod mc;
pub mod rng;
pub mod valuation;

pub use error::ValuationError;
pub use valuation::{ModelChoice, ValuationRequest, ValuationResult, Valuator};

#[cfg(test)]
mod integration_tests;
