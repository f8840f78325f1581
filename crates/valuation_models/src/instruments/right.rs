//! Option right (call/put) definitions.

use std::fmt;

/// The right conferred by an option contract.
///
/// A single tagged enum replaces a call/put subclass pair: both rights share
/// one constructor and differ only where the payoff formula branches.
///
/// # Examples
/// ```
/// use valuation_models::instruments::OptionRight;
///
/// let right = OptionRight::Call;
/// assert!(right.is_call());
/// assert_eq!(format!("{}", right), "Call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionRight {
    /// Right to buy: payoff max(S - K, 0).
    Call,
    /// Right to sell: payoff max(K - S, 0).
    Put,
}

impl OptionRight {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionRight::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionRight::Put)
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRight::Call => write!(f, "Call"),
            OptionRight::Put => write!(f, "Put"),
        }
    }
}
