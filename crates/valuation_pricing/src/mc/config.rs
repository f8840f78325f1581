//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 100_000;

/// Default number of time steps per path.
pub const DEFAULT_STEPS: usize = 100;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters. Use
/// [`SimulationConfigBuilder`] to construct instances, or `Default` for the
/// documented defaults (100 steps, 100 000 paths, unseeded).
///
/// # Examples
///
/// ```rust
/// use valuation_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: DEFAULT_STEPS,
            seed: None,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Fields left unset fall back to the documented defaults.
///
/// # Examples
///
/// ```rust
/// use valuation_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.n_steps(), 100);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths (in [1, [`MAX_PATHS`]]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path (in [1, [`MAX_STEPS`]]).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration, validating the ranges.
    ///
    /// # Errors
    /// Returns `ConfigError` if path or step counts are out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            n_steps: self.n_steps.unwrap_or(DEFAULT_STEPS),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_all_fields() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .n_steps(10)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 1000);
        assert_eq!(config.n_steps(), 10);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config.n_paths(), DEFAULT_PATHS);
        assert_eq!(config.n_steps(), DEFAULT_STEPS);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_default_impl_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_paths_rejected() {
        let result = SimulationConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_excessive_paths_rejected() {
        let result = SimulationConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = SimulationConfig::builder().n_steps(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_excessive_steps_rejected() {
        let result = SimulationConfig::builder().n_steps(MAX_STEPS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }
}
