use thiserror::Error;

/// Node positions for a 1-D conduction problem.
///
/// Positions are strictly increasing; the first and last nodes are the
/// domain boundaries where Dirichlet temperatures apply. Spacing may be
/// non-uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh1d {
    nodes: Vec<f64>,
}

/// Errors from constructing a 1-D mesh.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MeshError {
    #[error("a 1-D mesh needs at least 2 nodes, got {len}")]
    TooFewNodes { len: usize },

    #[error("node {index} is not finite: {value}")]
    NonFiniteNode { index: usize, value: f64 },

    #[error("nodes must be strictly increasing: node {index} = {value} does not exceed its predecessor")]
    NotIncreasing { index: usize, value: f64 },

    #[error("domain length must be positive and finite, got {value}")]
    InvalidLength { value: f64 },

    #[error("stretching power must be positive and finite, got {value}")]
    InvalidPower { value: f64 },
}

impl Mesh1d {
    /// Builds a mesh from explicit node positions.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 nodes are given, any node is not
    /// finite, or the positions are not strictly increasing.
    pub fn from_nodes(nodes: Vec<f64>) -> Result<Self, MeshError> {
        if nodes.len() < 2 {
            return Err(MeshError::TooFewNodes { len: nodes.len() });
        }
        for (index, &value) in nodes.iter().enumerate() {
            if !value.is_finite() {
                return Err(MeshError::NonFiniteNode { index, value });
            }
            if index > 0 && value <= nodes[index - 1] {
                return Err(MeshError::NotIncreasing { index, value });
            }
        }
        Ok(Self { nodes })
    }

    /// Builds `n` evenly spaced nodes on `[0, length]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not positive and finite or `n < 2`.
    pub fn uniform(length: f64, n: usize) -> Result<Self, MeshError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(MeshError::InvalidLength { value: length });
        }
        if n < 2 {
            return Err(MeshError::TooFewNodes { len: n });
        }
        let last = (n - 1) as f64;
        let nodes = (0..n).map(|i| length * i as f64 / last).collect();
        Ok(Self { nodes })
    }

    /// Builds `n` power-law stretched nodes on `[0, length]`.
    ///
    /// Node `i` sits at `length * (i / (n - 1))^power`, so `power > 1`
    /// clusters nodes toward the left boundary and `power < 1` toward the
    /// right. `power = 1` gives a uniform mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` or `power` is not positive and finite,
    /// or `n < 2`.
    pub fn stretched(length: f64, n: usize, power: f64) -> Result<Self, MeshError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(MeshError::InvalidLength { value: length });
        }
        if !power.is_finite() || power <= 0.0 {
            return Err(MeshError::InvalidPower { value: power });
        }
        if n < 2 {
            return Err(MeshError::TooFewNodes { len: n });
        }
        let last = (n - 1) as f64;
        let nodes = (0..n)
            .map(|i| length * (i as f64 / last).powf(power))
            .collect();
        Self::from_nodes(nodes)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a mesh holds at least 2 nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node positions in increasing order.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Total domain length, `x[n-1] - x[0]`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.nodes[self.nodes.len() - 1] - self.nodes[0]
    }
}
