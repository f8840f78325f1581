//! Valuation facade: request validation, model dispatch, result assembly.
//!
//! The facade is the library boundary consumed by the presentation layer:
//! it accepts one parameter record, validates everything up front, routes
//! to exactly one pricing model, and returns one output record. Greeks are
//! always sourced from the closed-form model regardless of which model
//! produced the headline price, because only the closed form has tractable
//! analytic sensitivities.

use valuation_core::{Date, MarketInputs};
use valuation_models::analytical::{BlackScholes, Greeks};
use valuation_models::instruments::VanillaOption;

use crate::error::ValuationError;
use crate::lattice::{BinomialTreeEngine, LatticeConfig};
use crate::mc::{MonteCarloEngine, SimulationConfig};

/// Pricing model selector with its model-specific knobs.
///
/// An exhaustively matched enum: each arm carries exactly the parameters
/// its model consumes, and adding a model is a compile-time-checked
/// change.
///
/// # Examples
/// ```
/// use valuation_pricing::lattice::LatticeConfig;
/// use valuation_pricing::ModelChoice;
///
/// let model = ModelChoice::Lattice(LatticeConfig::new(500));
/// assert_eq!(model.name(), "Lattice");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelChoice {
    /// Closed-form analytic model.
    Analytic,
    /// Discrete-time binomial lattice.
    Lattice(LatticeConfig),
    /// Monte Carlo simulation.
    Simulation(SimulationConfig),
}

impl ModelChoice {
    /// Returns the model name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ModelChoice::Analytic => "Analytic",
            ModelChoice::Lattice(_) => "Lattice",
            ModelChoice::Simulation(_) => "Simulation",
        }
    }
}

/// One valuation request: contract terms, market inputs, model choice.
///
/// Mirrors the external parameter record supplied by the presentation
/// layer; the expiry date travels inside the contract as an ISO-8601
/// calendar date.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationRequest {
    /// The option contract.
    pub option: VanillaOption,
    /// Market inputs for this call.
    pub market: MarketInputs,
    /// Which pricing model to use, with its knobs.
    pub model: ModelChoice,
}

/// One valuation output record.
///
/// Ephemeral: nothing persists across calls.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Intrinsic payoff of the contract at the requested spot.
    pub payoff: f64,
    /// Price from the selected model.
    pub price: f64,
    /// Sensitivities, always from the closed-form model.
    pub greeks: Greeks,
    /// Standard error of the price, present for Simulation only.
    pub std_error: Option<f64>,
}

/// The valuation facade.
///
/// Carries the injected valuation date; everything else arrives per
/// request, so a `Valuator` is safe to share and reuse across calls.
///
/// # Examples
/// ```
/// use valuation_core::{Date, MarketInputs};
/// use valuation_models::instruments::{ExerciseStyle, OptionRight, VanillaOption};
/// use valuation_pricing::{ModelChoice, ValuationRequest, Valuator};
///
/// let valuator = Valuator::new(Date::from_ymd(2025, 1, 1).unwrap());
/// let request = ValuationRequest {
///     option: VanillaOption::new(
///         OptionRight::Call,
///         "ACME",
///         100.0,
///         Date::from_ymd(2026, 1, 1).unwrap(),
///         ExerciseStyle::European,
///     )
///     .unwrap(),
///     market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
///     model: ModelChoice::Analytic,
/// };
///
/// let result = valuator.value(&request).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Valuator {
    valuation_date: Date,
}

impl Valuator {
    /// Creates a facade valuing as of the given date.
    ///
    /// The date is injected rather than read from the system clock so that
    /// valuations are reproducible.
    pub fn new(valuation_date: Date) -> Self {
        Self { valuation_date }
    }

    /// Returns the valuation date.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Values one request.
    ///
    /// Validation happens before any pricing work: market inputs first,
    /// then the contract horizon, then the model knobs. The selected model
    /// produces the headline price; the payoff comes from the contract at
    /// the requested spot and the Greeks from the closed-form model.
    ///
    /// # Errors
    /// - `ValuationError::InvalidParameter` for constraint violations
    /// - `ValuationError::ExpiredContract` when time to expiry <= 0
    /// - `ValuationError::UnsupportedModelVariant` for American exercise
    ///   under the Analytic or Simulation models
    pub fn value(&self, request: &ValuationRequest) -> Result<ValuationResult, ValuationError> {
        let option = &request.option;
        let market = &request.market;

        market.validate()?;
        let expiry = option.time_to_expiry(self.valuation_date)?;

        let analytic = BlackScholes::new(
            market.spot,
            market.rate,
            market.dividend_yield,
            market.volatility,
        )?;

        let (price, std_error) = match request.model {
            ModelChoice::Analytic => {
                if option.exercise().allows_early_exercise() {
                    return Err(ValuationError::UnsupportedModelVariant {
                        model: request.model.name(),
                        style: option.exercise(),
                    });
                }
                (analytic.price(option.right(), option.strike(), expiry)?, None)
            }
            ModelChoice::Lattice(config) => {
                config.validate()?;
                let engine = BinomialTreeEngine::with_config(config);
                let price = engine.price(
                    option.right(),
                    option.exercise(),
                    option.strike(),
                    expiry,
                    market,
                )?;
                (price, None)
            }
            ModelChoice::Simulation(config) => {
                if option.exercise().allows_early_exercise() {
                    return Err(ValuationError::UnsupportedModelVariant {
                        model: request.model.name(),
                        style: option.exercise(),
                    });
                }
                config.validate()?;
                let engine = MonteCarloEngine::new(config)?;
                let result = engine.price(option, expiry, market)?;
                (result.price, Some(result.std_error))
            }
        };

        let greeks = analytic.greeks(option.right(), option.strike(), expiry)?;

        Ok(ValuationResult {
            payoff: option.payoff(market.spot),
            price,
            greeks,
            std_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valuation_models::instruments::{ExerciseStyle, OptionRight};

    fn valuator() -> Valuator {
        Valuator::new(Date::from_ymd(2025, 1, 1).unwrap())
    }

    fn one_year_option(right: OptionRight, style: ExerciseStyle) -> VanillaOption {
        VanillaOption::new(
            right,
            "ACME",
            100.0,
            Date::from_ymd(2026, 1, 1).unwrap(),
            style,
        )
        .unwrap()
    }

    fn request(model: ModelChoice) -> ValuationRequest {
        ValuationRequest {
            option: one_year_option(OptionRight::Call, ExerciseStyle::European),
            market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
            model,
        }
    }

    #[test]
    fn test_analytic_reference_scenario() {
        let result = valuator().value(&request(ModelChoice::Analytic)).unwrap();

        assert_relative_eq!(result.price, 10.4506, epsilon = 1e-3);
        assert_eq!(result.payoff, 0.0);
        assert_eq!(result.std_error, None);
    }

    #[test]
    fn test_payoff_reported_at_requested_spot() {
        let mut req = request(ModelChoice::Analytic);
        req.market.spot = 150.0;
        let result = valuator().value(&req).unwrap();
        assert_relative_eq!(result.payoff, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_greeks_always_present_and_analytic() {
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let expected = bs.greeks(OptionRight::Call, 100.0, 1.0).unwrap();

        for model in [
            ModelChoice::Analytic,
            ModelChoice::Lattice(LatticeConfig::new(64)),
            ModelChoice::Simulation(
                SimulationConfig::builder()
                    .n_paths(1_000)
                    .n_steps(10)
                    .seed(42)
                    .build()
                    .unwrap(),
            ),
        ] {
            let result = valuator().value(&request(model)).unwrap();
            assert_eq!(result.greeks, expected, "model {}", model.name());
        }
    }

    #[test]
    fn test_lattice_price_tracks_analytic() {
        let analytic = valuator().value(&request(ModelChoice::Analytic)).unwrap();
        let lattice = valuator()
            .value(&request(ModelChoice::Lattice(LatticeConfig::new(2000))))
            .unwrap();

        assert_relative_eq!(lattice.price, analytic.price, epsilon = 5e-3);
        assert_eq!(lattice.std_error, None);
    }

    #[test]
    fn test_simulation_reports_std_error() {
        let config = SimulationConfig::builder()
            .n_paths(20_000)
            .n_steps(50)
            .seed(42)
            .build()
            .unwrap();
        let result = valuator()
            .value(&request(ModelChoice::Simulation(config)))
            .unwrap();

        let se = result.std_error.expect("simulation carries an error bar");
        assert!(se > 0.0);

        let analytic = valuator().value(&request(ModelChoice::Analytic)).unwrap();
        assert!((result.price - analytic.price).abs() < 4.0 * se + 0.05);
    }

    #[test]
    fn test_american_lattice_supported_and_dominates() {
        let euro = ValuationRequest {
            option: one_year_option(OptionRight::Put, ExerciseStyle::European),
            market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
            model: ModelChoice::Lattice(LatticeConfig::new(200)),
        };
        let amer = ValuationRequest {
            option: one_year_option(OptionRight::Put, ExerciseStyle::American),
            ..euro.clone()
        };

        let euro_result = valuator().value(&euro).unwrap();
        let amer_result = valuator().value(&amer).unwrap();
        assert!(amer_result.price >= euro_result.price);
    }

    #[test]
    fn test_american_analytic_unsupported() {
        let req = ValuationRequest {
            option: one_year_option(OptionRight::Call, ExerciseStyle::American),
            market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
            model: ModelChoice::Analytic,
        };
        assert_eq!(
            valuator().value(&req),
            Err(ValuationError::UnsupportedModelVariant {
                model: "Analytic",
                style: ExerciseStyle::American,
            })
        );
    }

    #[test]
    fn test_american_simulation_unsupported() {
        let req = ValuationRequest {
            option: one_year_option(OptionRight::Call, ExerciseStyle::American),
            market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
            model: ModelChoice::Simulation(SimulationConfig::default()),
        };
        assert!(matches!(
            valuator().value(&req),
            Err(ValuationError::UnsupportedModelVariant {
                model: "Simulation",
                ..
            })
        ));
    }

    #[test]
    fn test_expired_contract_rejected() {
        let late = Valuator::new(Date::from_ymd(2027, 1, 1).unwrap());
        assert!(matches!(
            late.value(&request(ModelChoice::Analytic)),
            Err(ValuationError::ExpiredContract(_))
        ));

        // Valuing exactly on expiry is also rejected
        let on_expiry = Valuator::new(Date::from_ymd(2026, 1, 1).unwrap());
        assert!(matches!(
            on_expiry.value(&request(ModelChoice::Analytic)),
            Err(ValuationError::ExpiredContract(_))
        ));
    }

    #[test]
    fn test_invalid_market_rejected_before_pricing() {
        let mut req = request(ModelChoice::Analytic);
        req.market.spot = -1.0;
        assert!(matches!(
            valuator().value(&req),
            Err(ValuationError::InvalidParameter(msg)) if msg.contains("spot")
        ));

        let mut req = request(ModelChoice::Analytic);
        req.market.volatility = 0.0;
        assert!(matches!(
            valuator().value(&req),
            Err(ValuationError::InvalidParameter(msg)) if msg.contains("sigma")
        ));
    }

    #[test]
    fn test_invalid_model_knobs_rejected() {
        let req = request(ModelChoice::Lattice(LatticeConfig::new(0)));
        assert!(matches!(
            valuator().value(&req),
            Err(ValuationError::InvalidParameter(msg)) if msg.contains("step count")
        ));

        let bad_sim = SimulationConfig::builder().n_paths(0).build();
        assert!(bad_sim.is_err());
    }

    #[test]
    fn test_valuation_is_pure() {
        let config = SimulationConfig::builder()
            .n_paths(5_000)
            .n_steps(20)
            .seed(7)
            .build()
            .unwrap();
        let req = request(ModelChoice::Simulation(config));

        let first = valuator().value(&req).unwrap();
        let second = valuator().value(&req).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_serde_roundtrip() {
        let req = request(ModelChoice::Lattice(LatticeConfig::new(500)));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"2026-01-01\""));

        let parsed: ValuationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serialises_output_record() {
        let result = valuator().value(&request(ModelChoice::Analytic)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        for field in ["payoff", "price", "delta", "gamma", "vega", "theta", "rho"] {
            assert!(json.contains(field), "missing {} in {}", field, json);
        }
    }
}
