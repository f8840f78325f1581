//! Discrete-time binomial lattice pricing.
//!
//! This module provides:
//! - `BinomialTreeEngine`: Cox-Ross-Rubinstein recombining tree with
//!   backward induction, for European and American exercise
//! - `LatticeConfig` / `DownWeight`: engine parameters
//! - `LatticeError`: lattice-specific errors

mod binomial;
mod error;

pub use binomial::{BinomialTreeEngine, DownWeight, LatticeConfig, DEFAULT_LATTICE_STEPS, MAX_LATTICE_STEPS};
pub use error::LatticeError;
