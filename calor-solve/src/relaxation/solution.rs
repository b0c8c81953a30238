use calor_core::Grid;

/// Indicates how the relaxation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The max-norm change dropped to the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision; the field is well
    /// defined but not converged.
    StoppedByObserver,
}

/// The result of a plate relaxation solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The final field, borders included.
    pub grid: Grid,
    /// Final solver status.
    pub status: Status,
    /// Number of sweeps performed.
    pub sweeps: usize,
    /// Max-norm change of the last sweep.
    pub delta: f64,
}
