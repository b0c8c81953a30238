use thiserror::Error;

/// Errors that can occur during the 1-D conduction solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("conductivity count {kappa} does not match mesh node count {nodes}")]
    ConductivityMismatch { nodes: usize, kappa: usize },

    #[error("{end} boundary temperature is not finite: {value}")]
    NonFiniteBoundary { end: &'static str, value: f64 },

    /// The assembled matrix cannot be solved: a conductivity is
    /// non-positive or elimination hit a vanishing pivot.
    #[error("singular system at row {row}: {reason}")]
    SingularSystem { row: usize, reason: &'static str },
}
