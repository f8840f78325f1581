//! Cox-Ross-Rubinstein binomial tree engine.
//!
//! Recombining lattice with up/down factors u = e^(sigma*sqrt(dt)),
//! d = 1/u and risk-neutral up-probability p = (e^(r dt) - d) / (u - d).
//! Terminal payoffs are rolled back through the tree by discounted
//! expectation; American exercise takes the per-node maximum against the
//! intrinsic value.
//!
//! The backward sweep runs in place over a single value vector, and node
//! spots follow a multiplicative recurrence (spot * d^i * (u/d)^j), so the
//! grid is never materialised and no per-node `powf` is evaluated.

use valuation_core::MarketInputs;
use valuation_models::instruments::{ExerciseStyle, OptionRight};

use super::error::LatticeError;

/// Maximum number of lattice steps allowed.
pub const MAX_LATTICE_STEPS: usize = 100_000;

/// Default number of lattice steps when the caller does not choose one.
pub const DEFAULT_LATTICE_STEPS: usize = 200;

/// How the down-move weight is derived.
///
/// Two conventions are in circulation for the weight applied to the
/// down-branch during backward induction. They are kept separately
/// selectable because they price very differently and only one of them
/// is risk-neutral.
///
/// TODO: confirm whether `Discounted` is an intentional dividend
/// adjustment anywhere downstream; drop the variant once confirmed dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownWeight {
    /// Complement of the up-probability: 1 - p. The risk-neutral choice;
    /// converges to the closed-form price for European exercise.
    #[default]
    Complement,

    /// (e^(-r dt) - d) / (u - d). Not a probability complement: the two
    /// branch weights do not sum to 1 whenever r != 0.
    Discounted,
}

/// Binomial lattice parameters.
///
/// # Examples
/// ```
/// use valuation_pricing::lattice::{DownWeight, LatticeConfig};
///
/// let config = LatticeConfig::default();
/// assert_eq!(config.steps, 200);
/// assert_eq!(config.down_weight, DownWeight::Complement);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    /// Number of time steps (generations) in the tree.
    pub steps: usize,
    /// Down-branch weighting convention.
    #[cfg_attr(feature = "serde", serde(default))]
    pub down_weight: DownWeight,
}

impl LatticeConfig {
    /// Creates a configuration with the given step count and the default
    /// down-weight convention.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            down_weight: DownWeight::default(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// `LatticeError::InvalidStepCount` if `steps` is 0 or greater than
    /// [`MAX_LATTICE_STEPS`].
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.steps == 0 || self.steps > MAX_LATTICE_STEPS {
            return Err(LatticeError::InvalidStepCount(self.steps));
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LATTICE_STEPS)
    }
}

#[inline(always)]
fn intrinsic(right: OptionRight, spot: f64, strike: f64) -> f64 {
    match right {
        OptionRight::Call => (spot - strike).max(0.0),
        OptionRight::Put => (strike - spot).max(0.0),
    }
}

/// Cox-Ross-Rubinstein binomial tree engine.
///
/// Stateless between calls: each `price` invocation is a pure function of
/// the contract terms, the market inputs, and the configuration.
///
/// # Examples
/// ```
/// use valuation_core::MarketInputs;
/// use valuation_models::instruments::{ExerciseStyle, OptionRight};
/// use valuation_pricing::lattice::BinomialTreeEngine;
///
/// let engine = BinomialTreeEngine::new(200);
/// let market = MarketInputs::new(100.0, 0.05, 0.0, 0.2);
///
/// let price = engine
///     .price(OptionRight::Call, ExerciseStyle::European, 100.0, 1.0, &market)
///     .unwrap();
/// // Converges towards the closed-form value 10.4506
/// assert!((price - 10.45).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTreeEngine {
    config: LatticeConfig,
}

impl BinomialTreeEngine {
    /// Creates a tree engine with the given number of steps and the
    /// default down-weight convention.
    pub fn new(steps: usize) -> Self {
        Self {
            config: LatticeConfig::new(steps),
        }
    }

    /// Creates a tree engine from a full configuration.
    pub fn with_config(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Prices a vanilla option on the lattice.
    ///
    /// # Arguments
    /// * `right` - Call or Put
    /// * `exercise` - European or American
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiry as a year fraction (must be positive)
    /// * `market` - Market inputs (spot, rate, dividend yield, volatility)
    ///
    /// # Errors
    /// - `LatticeError::InvalidStepCount` for a bad configuration
    /// - `LatticeError::InvalidExpiry` / `InvalidVolatility` for degenerate
    ///   inputs
    /// - `LatticeError::ProbabilityOutOfRange` if p leaves [0, 1]
    pub fn price(
        &self,
        right: OptionRight,
        exercise: ExerciseStyle,
        strike: f64,
        expiry: f64,
        market: &MarketInputs,
    ) -> Result<f64, LatticeError> {
        self.config.validate()?;

        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(LatticeError::InvalidExpiry { expiry });
        }
        if !(market.volatility.is_finite() && market.volatility > 0.0) {
            return Err(LatticeError::InvalidVolatility {
                volatility: market.volatility,
            });
        }

        let steps = self.config.steps;
        let dt = expiry / steps as f64;

        let u = (market.volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = ((market.rate * dt).exp() - d) / (u - d);
        if !(0.0..=1.0).contains(&p) || !p.is_finite() {
            return Err(LatticeError::ProbabilityOutOfRange { p });
        }

        let down_weight = match self.config.down_weight {
            DownWeight::Complement => 1.0 - p,
            DownWeight::Discounted => ((-market.rate * dt).exp() - d) / (u - d),
        };

        let disc = (-market.rate * dt).exp();
        let disc_up = disc * p;
        let disc_down = disc * down_weight;

        let is_american = exercise.allows_early_exercise();

        // Terminal layer: node j holds j up-moves out of `steps`.
        // spot * d^steps * (u/d)^j walks the layer with one multiply per node.
        let ratio = u / d;
        let mut values = vec![0.0_f64; steps + 1];
        {
            let mut node_spot = market.spot * d.powi(steps as i32);
            for value in values.iter_mut() {
                *value = intrinsic(right, node_spot, strike);
                node_spot *= ratio;
            }
        }

        // Backward induction, generation i from steps-1 down to 0.
        let mut base = market.spot * d.powi(steps as i32 - 1);
        for i in (0..steps).rev() {
            if is_american {
                let mut node_spot = base;
                for j in 0..=i {
                    let continuation = disc_up * values[j + 1] + disc_down * values[j];
                    let exercise_value = intrinsic(right, node_spot, strike);
                    values[j] = continuation.max(exercise_value);
                    node_spot *= ratio;
                }
            } else {
                for j in 0..=i {
                    values[j] = disc_up * values[j + 1] + disc_down * values[j];
                }
            }
            base *= u;
        }

        Ok(values[0])
    }
}

impl Default for BinomialTreeEngine {
    fn default() -> Self {
        Self::with_config(LatticeConfig::default())
    }
}
