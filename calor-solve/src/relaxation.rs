mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use calor_core::{BoundaryConditions, Grid, Observer};

/// Control actions supported by the relaxation solver.
pub enum Action {
    /// Stop the solver early and return the current field.
    StopEarly,
}

/// Sweep event emitted by the relaxation solver.
pub struct Event<'a> {
    /// Sweep counter (1-based).
    pub sweep: usize,
    /// Max-norm change of this sweep.
    pub delta: f64,
    /// The field after this sweep.
    pub grid: &'a Grid,
}

/// A rectangular plate with fixed edge temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateProblem {
    pub rows: usize,
    pub cols: usize,
    pub boundary: BoundaryConditions,
}

/// Relaxes a freshly initialized plate to the discrete Laplace steady state.
///
/// Interior cells start at the mean of the four edge temperatures and are
/// updated in place with Gauss-Seidel sweeps (row-major over the interior,
/// five-point stencil) until the max-norm change of a sweep drops to
/// `config.tol`. Observers see each sweep's field and max change.
///
/// # Errors
///
/// Returns an error if the config or plate is invalid, or if the sweep cap
/// is exhausted before convergence.
pub fn solve<Obs>(
    problem: &PlateProblem,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let grid = Grid::with_boundaries(problem.rows, problem.cols, &problem.boundary)?;
    relax(grid, config, observer)
}

/// Relaxes an existing field toward the steady state.
///
/// The grid's border cells are taken as the fixed boundary data, so a
/// previous solution can be re-solved as a warm start; an already-converged
/// field terminates after a single sweep.
///
/// # Errors
///
/// Returns an error if the config is invalid or the sweep cap is exhausted
/// before convergence.
pub fn solve_from<Obs>(grid: Grid, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    relax(grid, config, observer)
}

/// Runs relaxation without observation.
///
/// # Errors
///
/// Returns an error if the config or plate is invalid, or if the sweep cap
/// is exhausted before convergence.
pub fn solve_unobserved(problem: &PlateProblem, config: &Config) -> Result<Solution, Error> {
    solve(problem, config, ())
}

/// Solves the heated-plate problem with the narrow flat contract.
///
/// Builds an `rows x cols` grid with the given edge temperatures and relaxes
/// it to `tol` under the default sweep cap, returning just the converged
/// field.
///
/// # Errors
///
/// Returns an error if the dimensions, edge temperatures, or tolerance are
/// invalid, or if the default sweep cap is exhausted before convergence.
pub fn solve_plate(
    rows: usize,
    cols: usize,
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    tol: f64,
) -> Result<Grid, Error> {
    let problem = PlateProblem {
        rows,
        cols,
        boundary: BoundaryConditions {
            top,
            bottom,
            left,
            right,
        },
    };
    solve(&problem, &Config::with_tol(tol), ()).map(|solution| solution.grid)
}

/// The sweep loop shared by `solve` and `solve_from`.
fn relax<Obs>(mut grid: Grid, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut last_delta = f64::INFINITY;

    for sweep in 1..=config.max_sweeps {
        let delta = sweep_interior(&mut grid);
        last_delta = delta;

        let event = Event {
            sweep,
            delta,
            grid: &grid,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        grid,
                        status: Status::StoppedByObserver,
                        sweeps: sweep,
                        delta,
                    });
                }
            }
        }

        if delta <= config.tol {
            return Ok(Solution {
                grid,
                status: Status::Converged,
                sweeps: sweep,
                delta,
            });
        }
    }

    Err(Error::ConvergenceFailure {
        sweeps: config.max_sweeps,
        delta: last_delta,
    })
}

/// One in-place Gauss-Seidel pass over the interior.
///
/// Each interior cell is replaced by the average of its four direct
/// neighbors, sweeping row-major so cells above and to the left already
/// carry this sweep's values. Returns the max-norm change.
fn sweep_interior(grid: &mut Grid) -> f64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let values = grid.values_mut();
    let mut delta = 0.0_f64;

    for i in 1..rows - 1 {
        for j in 1..cols - 1 {
            let old = values[[i, j]];
            let new = 0.25
                * (values[[i - 1, j]] + values[[i + 1, j]] + values[[i, j - 1]]
                    + values[[i, j + 1]]);
            values[[i, j]] = new;
            delta = delta.max((new - old).abs());
        }
    }

    delta
}
