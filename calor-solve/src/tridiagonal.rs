//! Direct solver for 1-D steady conduction with varying conductivity.
//!
//! Solves `d/dx(kappa(x) dT/dx) = 0` on a possibly non-uniform mesh with
//! Dirichlet temperatures at both ends. Interior rows express flux
//! continuity between adjacent cells with harmonic-mean face
//! conductivities; the resulting tridiagonal system is solved in one
//! forward-elimination/back-substitution pass.

mod error;

pub use error::Error;

use calor_core::Mesh1d;

/// Solves the 1-D steady conduction system and returns the node
/// temperatures in mesh order.
///
/// `kappa` holds one positive conductivity per mesh node. Face
/// conductivities between neighboring nodes are their harmonic mean, the
/// physically standard choice for series conduction; for uniform
/// conductivity it reduces to the nodal value and the result is the exact
/// linear interpolation between `left_bc` and `right_bc`.
///
/// # Errors
///
/// Returns an error if `kappa` and the mesh disagree in length, a boundary
/// temperature is not finite, any conductivity is non-positive, or
/// elimination hits a vanishing pivot.
pub fn solve_system(
    mesh: &Mesh1d,
    kappa: &[f64],
    left_bc: f64,
    right_bc: f64,
) -> Result<Vec<f64>, Error> {
    let n = mesh.len();
    if kappa.len() != n {
        return Err(Error::ConductivityMismatch {
            nodes: n,
            kappa: kappa.len(),
        });
    }
    if !left_bc.is_finite() {
        return Err(Error::NonFiniteBoundary {
            end: "left",
            value: left_bc,
        });
    }
    if !right_bc.is_finite() {
        return Err(Error::NonFiniteBoundary {
            end: "right",
            value: right_bc,
        });
    }
    for (row, &k) in kappa.iter().enumerate() {
        if !k.is_finite() || k <= 0.0 {
            return Err(Error::SingularSystem {
                row,
                reason: "conductivity is not positive",
            });
        }
    }

    let x = mesh.nodes();
    let mut sub = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut sup = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    // Boundary rows are direct equality constraints.
    diag[0] = 1.0;
    rhs[0] = left_bc;
    diag[n - 1] = 1.0;
    rhs[n - 1] = right_bc;

    // Interior rows: flux into the node equals flux out.
    for i in 1..n - 1 {
        let west = harmonic_mean(kappa[i - 1], kappa[i]) / (x[i] - x[i - 1]);
        let east = harmonic_mean(kappa[i], kappa[i + 1]) / (x[i + 1] - x[i]);
        sub[i] = west;
        diag[i] = -(west + east);
        sup[i] = east;
    }

    thomas(&sub, &diag, &sup, &rhs)
}

/// Harmonic mean of two conductivities.
fn harmonic_mean(a: f64, b: f64) -> f64 {
    2.0 * a * b / (a + b)
}

/// Thomas algorithm: forward elimination then back substitution, O(N).
///
/// `sub[0]` and `sup[n-1]` are unused. Positive conductivities make the
/// assembled system diagonally dominant, so no pivoting is needed; a
/// vanishing pivot is reported rather than divided by.
fn thomas(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Result<Vec<f64>, Error> {
    let n = rhs.len();
    let mut sup_prime = vec![0.0; n];
    let mut rhs_prime = vec![0.0; n];

    if pivot_vanishes(diag[0], row_scale(sub[0], diag[0], sup[0])) {
        return Err(Error::SingularSystem {
            row: 0,
            reason: "vanishing pivot during elimination",
        });
    }
    sup_prime[0] = sup[0] / diag[0];
    rhs_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let pivot = diag[i] - sub[i] * sup_prime[i - 1];
        if pivot_vanishes(pivot, row_scale(sub[i], diag[i], sup[i])) {
            return Err(Error::SingularSystem {
                row: i,
                reason: "vanishing pivot during elimination",
            });
        }
        if i < n - 1 {
            sup_prime[i] = sup[i] / pivot;
        }
        rhs_prime[i] = (rhs[i] - sub[i] * rhs_prime[i - 1]) / pivot;
    }

    let mut temperatures = vec![0.0; n];
    temperatures[n - 1] = rhs_prime[n - 1];
    for i in (0..n - 1).rev() {
        temperatures[i] = rhs_prime[i] - sup_prime[i] * temperatures[i + 1];
    }

    Ok(temperatures)
}

fn row_scale(sub: f64, diag: f64, sup: f64) -> f64 {
    sub.abs() + diag.abs() + sup.abs()
}

fn pivot_vanishes(pivot: f64, scale: f64) -> bool {
    !pivot.is_finite() || pivot.abs() <= f64::EPSILON * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uniform_conductivity_is_linear_interpolation() {
        let mesh = Mesh1d::from_nodes(vec![0.0, 0.5, 1.0]).expect("valid mesh");
        let kappa = vec![1.0; 3];

        let temperatures =
            solve_system(&mesh, &kappa, 80.0, -20.0).expect("should solve");

        assert_relative_eq!(temperatures[0], 80.0, epsilon = 1e-12);
        assert_relative_eq!(temperatures[1], 30.0, epsilon = 1e-12);
        assert_relative_eq!(temperatures[2], -20.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_interpolation_holds_on_stretched_mesh() {
        let mesh = Mesh1d::stretched(1.0, 20, 1.5).expect("valid mesh");
        let kappa = vec![3.7; 20];

        let temperatures =
            solve_system(&mesh, &kappa, 80.0, -20.0).expect("should solve");

        for (&x, &t) in mesh.nodes().iter().zip(&temperatures) {
            assert_relative_eq!(t, 80.0 - 100.0 * x, epsilon = 1e-9);
        }
    }

    #[test]
    fn two_node_system_returns_the_boundaries() {
        let mesh = Mesh1d::from_nodes(vec![0.0, 1.0]).expect("valid mesh");

        let temperatures =
            solve_system(&mesh, &[5.0, 5.0], 10.0, 20.0).expect("should solve");

        assert_relative_eq!(temperatures[0], 10.0);
        assert_relative_eq!(temperatures[1], 20.0);
    }

    #[test]
    fn composite_junction_uses_harmonic_mean() {
        // kappa = [2, 2, 1] on a uniform 3-node mesh: the west face keeps
        // conductivity 2, the east face is H(2, 1) = 4/3, and flux balance
        // puts the midpoint at 40 for BCs (80, -20).
        let mesh = Mesh1d::from_nodes(vec![0.0, 0.5, 1.0]).expect("valid mesh");
        let kappa = vec![2.0, 2.0, 1.0];

        let temperatures =
            solve_system(&mesh, &kappa, 80.0, -20.0).expect("should solve");

        assert_relative_eq!(temperatures[1], 40.0, epsilon = 1e-12);
    }

    #[test]
    fn temperatures_stay_within_boundary_range() {
        let mesh = Mesh1d::uniform(2.0, 15).expect("valid mesh");
        let kappa: Vec<f64> = (0..15).map(|i| 1.0 + 0.3 * f64::from(i)).collect();

        let temperatures =
            solve_system(&mesh, &kappa, 100.0, 0.0).expect("should solve");

        for &t in &temperatures[1..14] {
            assert!(t > 0.0 && t < 100.0, "node temperature {t} escapes the boundary range");
        }
    }

    #[test]
    fn errors_on_non_positive_conductivity() {
        let mesh = Mesh1d::uniform(1.0, 4).expect("valid mesh");

        let result = solve_system(&mesh, &[1.0, 0.0, 1.0, 1.0], 1.0, 0.0);
        assert!(matches!(
            result,
            Err(Error::SingularSystem { row: 1, .. })
        ));

        let result = solve_system(&mesh, &[1.0, 1.0, -2.0, 1.0], 1.0, 0.0);
        assert!(matches!(
            result,
            Err(Error::SingularSystem { row: 2, .. })
        ));
    }

    #[test]
    fn errors_on_length_mismatch() {
        let mesh = Mesh1d::uniform(1.0, 5).expect("valid mesh");

        let result = solve_system(&mesh, &[1.0, 1.0, 1.0], 1.0, 0.0);
        assert!(matches!(
            result,
            Err(Error::ConductivityMismatch { nodes: 5, kappa: 3 })
        ));
    }

    #[test]
    fn errors_on_non_finite_boundary() {
        let mesh = Mesh1d::uniform(1.0, 3).expect("valid mesh");
        let kappa = vec![1.0; 3];

        let result = solve_system(&mesh, &kappa, f64::NAN, 0.0);
        assert!(matches!(
            result,
            Err(Error::NonFiniteBoundary { end: "left", .. })
        ));

        let result = solve_system(&mesh, &kappa, 0.0, f64::INFINITY);
        assert!(matches!(
            result,
            Err(Error::NonFiniteBoundary { end: "right", .. })
        ));
    }
}
