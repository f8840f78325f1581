//! Cross-engine integration tests.
//!
//! The unit tests of each engine pin its own behaviour; the tests here
//! exercise the agreement between the three models on shared scenarios,
//! end to end through the facade.

use approx::assert_relative_eq;

use valuation_core::{Date, MarketInputs};
use valuation_models::instruments::{ExerciseStyle, OptionRight, VanillaOption};

use crate::lattice::LatticeConfig;
use crate::mc::SimulationConfig;
use crate::valuation::{ModelChoice, ValuationRequest, Valuator};

fn valuator() -> Valuator {
    Valuator::new(Date::from_ymd(2025, 1, 1).unwrap())
}

fn reference_request(right: OptionRight, model: ModelChoice) -> ValuationRequest {
    ValuationRequest {
        option: VanillaOption::new(
            right,
            "ACME",
            100.0,
            Date::from_ymd(2026, 1, 1).unwrap(),
            ExerciseStyle::European,
        )
        .unwrap(),
        market: MarketInputs::new(100.0, 0.05, 0.0, 0.2),
        model,
    }
}

#[test]
fn test_three_models_agree_on_reference_scenario() {
    let analytic = valuator()
        .value(&reference_request(OptionRight::Call, ModelChoice::Analytic))
        .unwrap();
    assert_relative_eq!(analytic.price, 10.4506, epsilon = 1e-3);

    let lattice = valuator()
        .value(&reference_request(
            OptionRight::Call,
            ModelChoice::Lattice(LatticeConfig::new(5000)),
        ))
        .unwrap();
    assert_relative_eq!(lattice.price, analytic.price, epsilon = 1e-3);

    let sim_config = SimulationConfig::builder()
        .n_paths(100_000)
        .n_steps(100)
        .seed(42)
        .build()
        .unwrap();
    let simulation = valuator()
        .value(&reference_request(
            OptionRight::Call,
            ModelChoice::Simulation(sim_config),
        ))
        .unwrap();
    let se = simulation.std_error.unwrap();
    assert!(
        (simulation.price - analytic.price).abs() < 3.0 * se + 0.02,
        "simulation {} vs analytic {} (se {})",
        simulation.price,
        analytic.price,
        se
    );
}

#[test]
fn test_parity_holds_through_the_facade() {
    let call = valuator()
        .value(&reference_request(OptionRight::Call, ModelChoice::Analytic))
        .unwrap();
    let put = valuator()
        .value(&reference_request(OptionRight::Put, ModelChoice::Analytic))
        .unwrap();

    let forward = 100.0 - 100.0 * (-0.05_f64).exp();
    assert_relative_eq!(call.price - put.price, forward, epsilon = 1e-9);
}

#[test]
fn test_lattice_and_simulation_agree_for_puts() {
    let lattice = valuator()
        .value(&reference_request(
            OptionRight::Put,
            ModelChoice::Lattice(LatticeConfig::new(2000)),
        ))
        .unwrap();

    let sim_config = SimulationConfig::builder()
        .n_paths(100_000)
        .n_steps(100)
        .seed(7)
        .build()
        .unwrap();
    let simulation = valuator()
        .value(&reference_request(
            OptionRight::Put,
            ModelChoice::Simulation(sim_config),
        ))
        .unwrap();

    let se = simulation.std_error.unwrap();
    assert!(
        (simulation.price - lattice.price).abs() < 4.0 * se + 0.02,
        "simulation {} vs lattice {} (se {})",
        simulation.price,
        lattice.price,
        se
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_record_in_record_out() {
    // The full presentation-layer flow: parameter record in, output
    // record out, both as JSON.
    let json = r#"{
        "option": {
            "right": "Call",
            "underlying": "EURUSD",
            "strike": 100.0,
            "expiry": "2026-01-01",
            "exercise": "European"
        },
        "market": {
            "spot": 100.0,
            "rate": 0.05,
            "dividend_yield": 0.0,
            "volatility": 0.2
        },
        "model": "Analytic"
    }"#;

    let request: ValuationRequest = serde_json::from_str(json).unwrap();
    let result = valuator().value(&request).unwrap();

    assert_relative_eq!(result.price, 10.4506, epsilon = 1e-3);

    let out = serde_json::to_value(result).unwrap();
    assert!(out.get("payoff").is_some());
    assert!(out.get("price").is_some());
    assert!(out["greeks"].get("delta").is_some());
}
