use thiserror::Error;

use calor_core::GridError;

/// Errors that can occur during plate relaxation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Grid construction failed: too small for an interior, or boundary
    /// data was not finite.
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The sweep cap was exhausted before the max-norm change dropped to
    /// the tolerance.
    #[error("did not converge within {sweeps} sweeps: max change {delta} still above tolerance")]
    ConvergenceFailure { sweeps: usize, delta: f64 },
}
