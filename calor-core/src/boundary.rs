#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed Dirichlet temperatures applied along the four edges of a plate.
///
/// Each temperature is applied uniformly along its edge. Corners follow a
/// fixed convention: the top and bottom rows are written first across their
/// full width, then the left and right columns overwrite over their full
/// height, so the four corner cells hold the left/right edge values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct BoundaryConditions {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Errors from validating boundary temperatures.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundaryError {
    #[error("{edge} boundary temperature is not finite: {value}")]
    NonFinite { edge: &'static str, value: f64 },
}

impl BoundaryConditions {
    /// Validates that all four edge temperatures are finite.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first non-finite edge.
    pub fn validate(&self) -> Result<(), BoundaryError> {
        for (edge, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !value.is_finite() {
                return Err(BoundaryError::NonFinite { edge, value });
            }
        }
        Ok(())
    }

    /// Returns the arithmetic mean of the four edge temperatures.
    ///
    /// Used as the initial guess for interior cells.
    #[must_use]
    pub fn mean(&self) -> f64 {
        0.25 * (self.top + self.bottom + self.left + self.right)
    }

    /// Returns the smallest edge temperature.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }

    /// Returns the largest edge temperature.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.top.max(self.bottom).max(self.left).max(self.right)
    }

    /// Returns uniform boundary conditions with every edge at `value`.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}
