//! Option exercise style definitions.

use std::fmt;

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: exercise only at expiry
/// - `American`: exercise at any time up to expiry
///
/// # Examples
/// ```
/// use valuation_models::instruments::ExerciseStyle;
///
/// let style = ExerciseStyle::American;
/// assert!(style.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,
    /// American style: exercise at any time up to expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether early exercise is permitted.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        self.is_american()
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}
