/// Configuration for the plate relaxation solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Safety bound on the number of sweeps before the solve fails.
    pub max_sweeps: usize,
    /// Convergence tolerance on the max-norm change per sweep.
    pub tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sweeps: 100_000,
            tol: 1e-6,
        }
    }
}

impl Config {
    /// Validates that the tolerance is positive and the sweep cap usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-positive or non-finite, or if
    /// `max_sweeps` is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err("tol must be finite and positive");
        }
        if self.max_sweeps == 0 {
            return Err("max_sweeps must be at least 1");
        }
        Ok(())
    }

    /// Returns a config with the given tolerance and the default sweep cap.
    #[must_use]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }
}
