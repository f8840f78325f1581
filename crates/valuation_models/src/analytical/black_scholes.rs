//! Black-Scholes pricing model for European options.
//!
//! Closed-form prices and analytic Greeks for European calls and puts on
//! an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**: P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)
//!
//! Vega and rho are quoted per one percentage point move (scaled by 0.01);
//! theta is quoted per calendar day (divided by 365).

use num_traits::Float;

use valuation_core::types::time::DAYS_PER_YEAR;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionRight;

/// The five first-order sensitivities of an option price.
///
/// Always produced by the closed-form model: it is the only model in the
/// engine with tractable analytic derivatives, so it serves as the Greeks
/// source of truth regardless of which model produced the headline price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dV/dS: sensitivity to the underlying price.
    pub delta: f64,
    /// d2V/dS2: convexity with respect to the underlying price.
    pub gamma: f64,
    /// dV/dsigma per one percentage point of volatility.
    pub vega: f64,
    /// dV/dt per calendar day (time decay).
    pub theta: f64,
    /// dV/dr per one percentage point of rate.
    pub rho: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market snapshot (spot, rate, dividend yield, volatility);
/// contract terms (strike, time to expiry, right) arrive per call so one
/// model instance prices any contract against the same snapshot.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use valuation_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S*exp(-qT) - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (sigma)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised; negative allowed)
    /// * `dividend_yield` - Continuous dividend yield (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, dividend_yield: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Rejects degenerate contract terms before any formula is evaluated.
    fn check_terms(&self, strike: T, expiry: T) -> Result<(), AnalyticalError> {
        let zero = T::zero();
        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }
        Ok(())
    }

    /// d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
    ///
    /// Assumes strike and expiry already validated by `check_terms`.
    fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend_yield
            + half * self.volatility * self.volatility)
            * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d2 = d1 - sigma*sqrt(T)
    fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
    ///
    /// # Errors
    /// `InvalidStrike` / `InvalidExpiry` on non-positive terms.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let carry = (-self.dividend_yield * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        Ok(self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
    ///
    /// # Errors
    /// `InvalidStrike` / `InvalidExpiry` on non-positive terms.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let carry = (-self.dividend_yield * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        Ok(strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1))
    }

    /// Prices a call or put according to the given right.
    ///
    /// # Examples
    /// ```
    /// use valuation_models::analytical::BlackScholes;
    /// use valuation_models::instruments::OptionRight;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price(OptionRight::Call, 100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price(&self, right: OptionRight, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        match right {
            OptionRight::Call => self.price_call(strike, expiry),
            OptionRight::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (dV/dS).
    ///
    /// - Call: e^(-qT)·N(d1), in [0, 1]
    /// - Put: e^(-qT)·(N(d1) - 1), in [-1, 0]
    pub fn delta(&self, right: OptionRight, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let carry = (-self.dividend_yield * expiry).exp();
        let n_d1 = norm_cdf(self.d1(strike, expiry));

        Ok(match right {
            OptionRight::Call => carry * n_d1,
            OptionRight::Put => carry * (n_d1 - T::one()),
        })
    }

    /// Computes Gamma (d2V/dS2).
    ///
    /// Gamma = e^(-qT)·phi(d1) / (S·sigma·sqrt(T)), identical for calls
    /// and puts and always non-negative.
    pub fn gamma(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let carry = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);

        Ok(carry * norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt()))
    }

    /// Computes Vega per one percentage point of volatility.
    ///
    /// Vega = 0.01·S·e^(-qT)·sqrt(T)·phi(d1), identical for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let scale = T::from(0.01).unwrap();
        let carry = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);

        Ok(scale * self.spot * carry * expiry.sqrt() * norm_pdf(d1))
    }

    /// Computes Theta per calendar day.
    ///
    /// The annualised decay is divided by 365, matching the ACT/365 day
    /// count used for the time to expiry itself.
    pub fn theta(&self, right: OptionRight, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let two = T::from(2.0).unwrap();
        let days_per_year = T::from(DAYS_PER_YEAR).unwrap();

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let carry = (-self.dividend_yield * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        // Common decay term: -(S·sigma·e^(-qT)·phi(d1)) / (2*sqrt(T))
        let decay = -(self.spot * self.volatility * carry * norm_pdf(d1)) / (two * sqrt_t);

        let annual = match right {
            OptionRight::Call => {
                decay - self.rate * strike * discount * norm_cdf(d2)
                    + self.dividend_yield * self.spot * carry * norm_cdf(d1)
            }
            OptionRight::Put => {
                decay + self.rate * strike * discount * norm_cdf(-d2)
                    - self.dividend_yield * self.spot * carry * norm_cdf(-d1)
            }
        };

        Ok(annual / days_per_year)
    }

    /// Computes Rho per one percentage point of rate.
    ///
    /// - Call: 0.01·K·T·e^(-rT)·N(d2)
    /// - Put: -0.01·K·T·e^(-rT)·N(-d2)
    pub fn rho(&self, right: OptionRight, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.check_terms(strike, expiry)?;

        let scale = T::from(0.01).unwrap();
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        Ok(match right {
            OptionRight::Call => scale * strike * expiry * discount * norm_cdf(d2),
            OptionRight::Put => -scale * strike * expiry * discount * norm_cdf(-d2),
        })
    }
}

impl BlackScholes<f64> {
    /// Computes all five Greeks in one call.
    ///
    /// # Examples
    /// ```
    /// use valuation_models::analytical::BlackScholes;
    /// use valuation_models::instruments::OptionRight;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
    /// let greeks = bs.greeks(OptionRight::Call, 100.0, 1.0).unwrap();
    ///
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma >= 0.0);
    /// ```
    pub fn greeks(
        &self,
        right: OptionRight,
        strike: f64,
        expiry: f64,
    ) -> Result<Greeks, AnalyticalError> {
        Ok(Greeks {
            delta: self.delta(right, strike, expiry)?,
            gamma: self.gamma(strike, expiry)?,
            vega: self.vega(strike, expiry)?,
            theta: self.theta(right, strike, expiry)?,
            rho: self.rho(right, strike, expiry)?,
        })
    }
}
