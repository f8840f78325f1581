//! Monte Carlo simulation pricing.
//!
//! This module provides:
//! - `SimulationConfig`: paths/steps/seed configuration with builder
//! - `MonteCarloEngine`: terminal-price GBM simulation pricer
//! - `SimulationResult`: price estimate with standard error
//! - `ConfigError`: configuration validation errors

mod config;
mod engine;
mod error;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_PATHS, DEFAULT_STEPS, MAX_PATHS, MAX_STEPS};
pub use engine::{MonteCarloEngine, SimulationResult};
pub use error::ConfigError;
