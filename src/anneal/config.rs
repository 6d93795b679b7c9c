//! Annealing configuration and the linear cooling schedule.

use crate::error::{Result, SimpixError};

/// Configuration for a pixel-morphing annealing run.
///
/// Temperature follows a linear schedule: after every step that does not
/// freeze, it drops by `cooling_fraction * initial_temperature`. The number
/// of temperature levels is therefore fixed by `cooling_fraction` alone.
///
/// # Examples
///
/// ```
/// use simpix::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.5)
///     .with_cooling_fraction(0.02)
///     .with_trials_per_step_factor(4)
///     .with_success_threshold(100)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_steps(), 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature `T0`. Must be positive.
    pub initial_temperature: f64,

    /// Fraction of `T0` removed after each step, in `(0, 1]`.
    pub cooling_fraction: f64,

    /// Swap attempts per step, as a multiple of the pixel count.
    pub trials_per_step_factor: usize,

    /// A step with fewer accepted swaps than this freezes the run.
    ///
    /// 0 disables freezing; the run then always ends by exhaustion.
    pub success_threshold: usize,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5.0,
            cooling_fraction: 0.01,
            trials_per_step_factor: 2,
            success_threshold: 5000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_fraction(mut self, fraction: f64) -> Self {
        self.cooling_fraction = fraction;
        self
    }

    pub fn with_trials_per_step_factor(mut self, k: usize) -> Self {
        self.trials_per_step_factor = k;
        self
    }

    pub fn with_success_threshold(mut self, n: usize) -> Self {
        self.success_threshold = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let t0 = self.initial_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(SimpixError::InvalidTemperature(t0));
        }
        let f = self.cooling_fraction;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(SimpixError::InvalidConfig(format!(
                "cooling_fraction must be in (0, 1], got {f}"
            )));
        }
        if self.trials_per_step_factor == 0 {
            return Err(SimpixError::InvalidConfig(
                "trials_per_step_factor must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on the number of steps: `ceil(1 / cooling_fraction)`.
    pub fn max_steps(&self) -> usize {
        (1.0 / self.cooling_fraction).ceil() as usize
    }

    /// Swap attempts in one step over `n` pixels.
    pub fn trials_per_step(&self, n: usize) -> usize {
        self.trials_per_step_factor.saturating_mul(n)
    }

    /// Temperature after `completed` cooling steps.
    ///
    /// Equals `T0` reduced `completed` times by `cooling_fraction * T0`,
    /// evaluated in closed form so no rounding accumulates.
    pub fn temperature_at(&self, completed: usize) -> f64 {
        self.initial_temperature * (1.0 - completed as f64 * self.cooling_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 5.0).abs() < 1e-12);
        assert!((config.cooling_fraction - 0.01).abs() < 1e-12);
        assert_eq!(config.trials_per_step_factor, 2);
        assert_eq!(config.success_threshold, 5000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(matches!(
                config.validate(),
                Err(SimpixError::InvalidTemperature(_))
            ));
        }
    }

    #[test]
    fn test_validate_bad_cooling_fraction() {
        for f in [0.0, -0.1, 1.5, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_fraction(f);
            assert!(matches!(
                config.validate(),
                Err(SimpixError::InvalidConfig(_))
            ));
        }
        let whole = AnnealConfig::default().with_cooling_fraction(1.0);
        assert!(whole.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_trials() {
        let config = AnnealConfig::default().with_trials_per_step_factor(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_steps() {
        assert_eq!(AnnealConfig::default().max_steps(), 100);
        let config = AnnealConfig::default().with_cooling_fraction(0.3);
        assert_eq!(config.max_steps(), 4);
        let config = AnnealConfig::default().with_cooling_fraction(1.0);
        assert_eq!(config.max_steps(), 1);
    }

    #[test]
    fn test_temperature_is_linear_in_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(5.0)
            .with_cooling_fraction(0.25);
        assert!((config.temperature_at(0) - 5.0).abs() < 1e-12);
        assert!((config.temperature_at(1) - 3.75).abs() < 1e-12);
        assert!((config.temperature_at(2) - 2.5).abs() < 1e-12);
        assert!(config.temperature_at(4).abs() < 1e-12);
    }
}
