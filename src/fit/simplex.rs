//! Nelder-Mead simplex search over R-K coefficient space.
//!
//! This is the iterative path: a derivative-free minimization of the sum of
//! squared residuals. It is slower than the closed-form solve but reproduces
//! the classic workflow (all-ones start, tight tolerance, 4000 iteration cap).
//! Hitting the iteration cap is not an error; the best vertex is returned.

use argmin::core::{CostFunction, Executor, State, TerminationReason};
use argmin::solver::neldermead::NelderMead;

use crate::error::{Result, RkError};
use crate::fit::fitter::sum_squared_residuals;

/// Relative step used to build the initial simplex around the start point.
const NONZERO_DELTA: f64 = 0.05;
/// Absolute step for coordinates that start at zero.
const ZERO_DELTA: f64 = 0.00025;

/// Result of a simplex search.
#[derive(Debug, Clone)]
pub struct SimplexOutcome {
    pub coeffs: Vec<f64>,
    pub iterations: u64,
    pub converged: bool,
}

struct SumOfSquares<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl CostFunction for SumOfSquares<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    /// NaN costs are reported as `+inf` so the simplex ordering stays total.
    fn cost(&self, coeffs: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        let sse = sum_squared_residuals(coeffs, self.x, self.y);
        Ok(if sse.is_nan() { f64::INFINITY } else { sse })
    }
}

/// Start point plus one vertex per coordinate with that coordinate perturbed.
pub fn initial_simplex(start: &[f64]) -> Vec<Vec<f64>> {
    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(start.to_vec());
    for i in 0..start.len() {
        let mut vertex = start.to_vec();
        vertex[i] = if vertex[i] != 0.0 {
            vertex[i] * (1.0 + NONZERO_DELTA)
        } else {
            ZERO_DELTA
        };
        simplex.push(vertex);
    }
    simplex
}

/// Minimize the sum of squared residuals starting from `start`.
pub fn minimize(
    x: &[f64],
    y: &[f64],
    start: Vec<f64>,
    max_iters: u64,
    tolerance: f64,
) -> Result<SimplexOutcome> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(RkError::InvalidInput(format!(
            "simplex tolerance must be finite and >= 0, got {tolerance}"
        )));
    }

    let solver = NelderMead::new(initial_simplex(&start))
        .with_sd_tolerance(tolerance)
        .map_err(|e| RkError::Optimizer(e.to_string()))?;

    let res = Executor::new(SumOfSquares { x, y }, solver)
        .configure(|state| state.max_iters(max_iters))
        .run()
        .map_err(|e| RkError::Optimizer(e.to_string()))?;

    let state = res.state();
    // No finite cost was ever seen: fall back to the start point.
    let coeffs = state.get_best_param().cloned().unwrap_or(start);
    let converged = matches!(
        state.get_termination_reason(),
        Some(TerminationReason::SolverConverged)
    );

    Ok(SimplexOutcome {
        coeffs,
        iterations: state.get_iter(),
        converged,
    })
}
