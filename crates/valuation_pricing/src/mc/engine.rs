//! Monte Carlo pricing engine.
//!
//! Simulates geometric Brownian motion terminal prices under the
//! risk-neutral measure and returns the discounted mean payoff together
//! with its standard error.
//!
//! # Reproducibility and parallelism
//!
//! Each path owns a generator derived deterministically from the base seed
//! and the path index ([`PathRng::for_path`]), so paths share no mutable
//! state and can be generated in any order. The fan-out runs on rayon;
//! payoffs land in a per-path buffer that is reduced sequentially, keeping
//! the result bit-identical across thread schedules.

use rayon::prelude::*;

use valuation_core::MarketInputs;
use valuation_models::instruments::VanillaOption;

use super::config::SimulationConfig;
use super::error::ConfigError;
use crate::rng::PathRng;

/// Monte Carlo price estimate with its statistical error.
///
/// The estimate carries intrinsic sampling noise; there is no convergence
/// guarantee for a single run, only in expectation as the path count grows.
///
/// # Examples
///
/// ```rust
/// use valuation_pricing::mc::SimulationResult;
///
/// let result = SimulationResult { price: 10.5, std_error: 0.05 };
/// assert!((result.confidence_95() - 0.098).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff over all paths.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine for vanilla options.
///
/// Stateless between calls apart from the immutable configuration; every
/// `price` invocation is a pure function of the contract, the market
/// inputs, the horizon, and the seed.
///
/// # Examples
///
/// ```rust
/// use valuation_core::{Date, MarketInputs};
/// use valuation_models::instruments::{ExerciseStyle, OptionRight, VanillaOption};
/// use valuation_pricing::mc::{MonteCarloEngine, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::new(config).unwrap();
///
/// let option = VanillaOption::new(
///     OptionRight::Call,
///     "ACME",
///     100.0,
///     Date::from_ymd(2026, 1, 1).unwrap(),
///     ExerciseStyle::European,
/// )
/// .unwrap();
/// let market = MarketInputs::new(100.0, 0.05, 0.0, 0.2);
///
/// let result = engine.price(&option, 1.0, &market).unwrap();
/// assert!(result.price > 0.0);
/// assert!(result.std_error > 0.0);
/// ```
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices a vanilla option by simulation.
    ///
    /// Per path, the terminal price is built from `n_steps` equal GBM
    /// subintervals of length T / n_steps, each multiplying the running
    /// price by e^((r - q - sigma^2/2) dt + sigma sqrt(dt) z). The payoff
    /// is the option's own payoff at the terminal price, discounted at
    /// e^(-rT); the horizon is the contract's actual time to expiry.
    ///
    /// # Arguments
    /// * `option` - The contract (supplies the payoff function)
    /// * `expiry` - Time to expiry as a year fraction (must be positive)
    /// * `market` - Market inputs
    ///
    /// # Errors
    /// `ConfigError::InvalidParameter` for non-positive expiry or
    /// volatility.
    pub fn price(
        &self,
        option: &VanillaOption,
        expiry: f64,
        market: &MarketInputs,
    ) -> Result<SimulationResult, ConfigError> {
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "expiry",
                value: format!("{} must be positive", expiry),
            });
        }
        if !(market.volatility.is_finite() && market.volatility > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} must be positive", market.volatility),
            });
        }

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let base_seed = self.config.seed().unwrap_or(0);

        let dt = expiry / n_steps as f64;
        let drift_dt =
            (market.rate - market.dividend_yield - 0.5 * market.volatility * market.volatility)
                * dt;
        let vol_sqrt_dt = market.volatility * dt.sqrt();
        let spot = market.spot;

        // Independent per-path streams: order of execution cannot change
        // the draws, so the rayon schedule is free to vary.
        let payoffs: Vec<f64> = (0..n_paths)
            .into_par_iter()
            .map(|path_idx| {
                let mut rng = PathRng::for_path(base_seed, path_idx as u64);
                let mut price = spot;
                for _ in 0..n_steps {
                    let z = rng.gen_normal();
                    price *= (drift_dt + vol_sqrt_dt * z).exp();
                }
                option.payoff(price)
            })
            .collect();

        // Sequential reduction over the indexed buffer fixes the summation
        // order regardless of how the paths were scheduled.
        let discount = (-market.rate * expiry).exp();
        let mean = payoffs.iter().sum::<f64>() / n_paths as f64;

        let std_error = if n_paths > 1 {
            let variance = payoffs.iter().map(|&p| (p - mean) * (p - mean)).sum::<f64>()
                / (n_paths - 1) as f64;
            (variance / n_paths as f64).sqrt()
        } else {
            0.0
        };

        Ok(SimulationResult {
            price: mean * discount,
            std_error: std_error * discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valuation_core::Date;
    use valuation_models::analytical::BlackScholes;
    use valuation_models::instruments::{ExerciseStyle, OptionRight};

    fn test_config(n_paths: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .n_steps(50)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn contract(right: OptionRight, strike: f64) -> VanillaOption {
        VanillaOption::new(
            right,
            "ACME",
            strike,
            Date::from_ymd(2026, 1, 1).unwrap(),
            ExerciseStyle::European,
        )
        .unwrap()
    }

    fn reference_market() -> MarketInputs {
        MarketInputs::new(100.0, 0.05, 0.0, 0.2)
    }

    #[test]
    fn test_engine_accepts_valid_config() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .n_steps(10)
            .build()
            .unwrap();
        assert!(MonteCarloEngine::new(config).is_ok());
    }

    #[test]
    fn test_price_positive_with_error_bar() {
        let engine = MonteCarloEngine::new(test_config(10_000, 42)).unwrap();
        let result = engine
            .price(&contract(OptionRight::Call, 100.0), 1.0, &reference_market())
            .unwrap();

        assert!(result.price > 0.0);
        assert!(result.std_error > 0.0);
        assert!(result.std_error < result.price * 0.1);
    }

    #[test]
    fn test_put_priced_with_its_own_payoff() {
        // The put payoff must flow through, not a call-only formula
        let engine = MonteCarloEngine::new(test_config(20_000, 42)).unwrap();
        let market = reference_market();

        let put = engine
            .price(&contract(OptionRight::Put, 100.0), 1.0, &market)
            .unwrap();
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let analytic_put = bs.price_put(100.0, 1.0).unwrap();

        assert!((put.price - analytic_put).abs() < 4.0 * put.std_error + 0.05);
    }

    #[test]
    fn test_same_seed_reproduces_result_exactly() {
        let engine1 = MonteCarloEngine::new(test_config(5_000, 42)).unwrap();
        let engine2 = MonteCarloEngine::new(test_config(5_000, 42)).unwrap();
        let option = contract(OptionRight::Call, 100.0);
        let market = reference_market();

        let r1 = engine1.price(&option, 1.0, &market).unwrap();
        let r2 = engine2.price(&option, 1.0, &market).unwrap();

        assert_eq!(r1.price, r2.price);
        assert_eq!(r1.std_error, r2.std_error);
    }

    #[test]
    fn test_different_seeds_differ() {
        let engine1 = MonteCarloEngine::new(test_config(5_000, 1)).unwrap();
        let engine2 = MonteCarloEngine::new(test_config(5_000, 2)).unwrap();
        let option = contract(OptionRight::Call, 100.0);
        let market = reference_market();

        let r1 = engine1.price(&option, 1.0, &market).unwrap();
        let r2 = engine2.price(&option, 1.0, &market).unwrap();

        assert_ne!(r1.price, r2.price);
    }

    #[test]
    fn test_horizon_is_the_contracts_own() {
        // Longer horizon, more time value: T must flow through the
        // simulation rather than any fixed constant
        let engine = MonteCarloEngine::new(test_config(20_000, 42)).unwrap();
        let option = contract(OptionRight::Call, 100.0);
        let market = reference_market();

        let short = engine.price(&option, 0.25, &market).unwrap();
        let long = engine.price(&option, 2.0, &market).unwrap();

        assert!(long.price > short.price + 1.0);
    }

    #[test]
    fn test_invalid_expiry_rejected() {
        let engine = MonteCarloEngine::new(test_config(1_000, 42)).unwrap();
        for expiry in [0.0, -1.0] {
            assert!(matches!(
                engine.price(&contract(OptionRight::Call, 100.0), expiry, &reference_market()),
                Err(ConfigError::InvalidParameter { name: "expiry", .. })
            ));
        }
    }

    #[test]
    fn test_invalid_volatility_rejected() {
        let engine = MonteCarloEngine::new(test_config(1_000, 42)).unwrap();
        let market = MarketInputs::new(100.0, 0.05, 0.0, 0.0);
        assert!(matches!(
            engine.price(&contract(OptionRight::Call, 100.0), 1.0, &market),
            Err(ConfigError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let config = SimulationConfig::builder()
            .n_paths(1)
            .n_steps(10)
            .seed(42)
            .build()
            .unwrap();
        let engine = MonteCarloEngine::new(config).unwrap();
        let result = engine
            .price(&contract(OptionRight::Call, 100.0), 1.0, &reference_market())
            .unwrap();

        assert_eq!(result.std_error, 0.0);
        assert!(result.price.is_finite());
    }

    #[test]
    fn test_confidence_interval_helpers() {
        let result = SimulationResult {
            price: 10.0,
            std_error: 0.1,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    #[test]
    fn test_dividend_yield_lowers_call_estimate() {
        let engine = MonteCarloEngine::new(test_config(20_000, 42)).unwrap();
        let option = contract(OptionRight::Call, 100.0);

        let flat = engine.price(&option, 1.0, &reference_market()).unwrap();
        let paying = engine
            .price(&option, 1.0, &MarketInputs::new(100.0, 0.05, 0.04, 0.2))
            .unwrap();

        assert!(paying.price < flat.price);
    }
}
