use thiserror::Error;

/// Configuration for gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    alpha: f64,
    tolerance: f64,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            alpha: 1.0,
            tolerance: 1e-3,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step size and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is not finite and positive, or if the
    /// tolerance is negative or non-finite.
    pub fn new(max_iters: usize, alpha: f64, tolerance: f64) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            alpha,
            tolerance,
        })
    }

    /// Returns the maximum number of updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step size applied to the derivative.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the gradient tolerance; the solver stops once `|f'(x)|` is below it.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_alpha() {
        assert_eq!(Config::new(10, 0.0, 1e-3), Err(ConfigError::Alpha));
        assert_eq!(Config::new(10, -0.1, 1e-3), Err(ConfigError::Alpha));
        assert_eq!(Config::new(10, f64::NAN, 1e-3), Err(ConfigError::Alpha));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.1, -1e-3), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::new(10, 0.1, f64::INFINITY),
            Err(ConfigError::Tolerance)
        );
    }
}
