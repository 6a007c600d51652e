//! Low-level fitting routines for a single R-K order.
//!
//! Given:
//! - compositions `x_i`
//! - observed values `y_i`
//! - an order `n` (number of R-K coefficients)
//!
//! we minimize `Σ (y_i - f(x_i))^2` over the coefficients, either in closed
//! form (the model is linear in `A`) or by a simplex search from the all-ones
//! vector, and report the resulting SSE / RMSE / BIC.

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitMethod, FitOptions, FitQuality, RkFit};
use crate::error::{Result, RkError};
use crate::fit::simplex::{SimplexOutcome, minimize};
use crate::math::solve_least_squares;
use crate::models::{evaluate_at, fill_design_row};

/// Floor on `SSE / n` inside the BIC log so exact fits stay finite.
const MIN_SSE_PER_POINT: f64 = 1e-12;

/// Fit `order` R-K coefficients by closed-form least squares.
pub fn fit(x: &[f64], y: &[f64], order: usize) -> Result<Vec<f64>> {
    fit_with_options(x, y, order, &FitOptions::default()).map(|fit| fit.coeffs)
}

/// Fit `order` R-K coefficients and report diagnostics.
pub fn fit_with_options(x: &[f64], y: &[f64], order: usize, opts: &FitOptions) -> Result<RkFit> {
    validate(x, y, order)?;

    let (coeffs, iterations, converged) = match opts.method {
        FitMethod::LeastSquares => (fit_least_squares(x, y, order)?, 0, true),
        FitMethod::NelderMead => {
            let SimplexOutcome {
                coeffs,
                iterations,
                converged,
            } = minimize(x, y, vec![1.0; order], opts.max_iters, opts.tolerance)?;
            (coeffs, iterations, converged)
        }
    };

    let sse = sum_squared_residuals(&coeffs, x, y);
    Ok(RkFit {
        quality: fit_quality(sse, x.len(), order),
        coeffs,
        method: opts.method,
        iterations,
        converged,
    })
}

/// Residuals `y - f(x)` for the given coefficients.
pub fn residuals(coeffs: &[f64], x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - evaluate_at(coeffs, xi))
        .collect()
}

/// Objective minimized by every fitting method.
pub fn sum_squared_residuals(coeffs: &[f64], x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - evaluate_at(coeffs, xi);
            r * r
        })
        .sum()
}

/// SSE / RMSE / BIC for `n` observations and `k` coefficients.
///
/// `BIC = n ln(SSE/n) + k ln(n)`.
pub fn fit_quality(sse: f64, n: usize, k: usize) -> FitQuality {
    let n_f = n as f64;
    let sse_per = (sse / n_f).max(MIN_SSE_PER_POINT);
    FitQuality {
        sse,
        rmse: (sse / n_f).sqrt(),
        bic: n_f * sse_per.ln() + (k as f64) * n_f.ln(),
        n,
    }
}

pub(crate) fn validate(x: &[f64], y: &[f64], order: usize) -> Result<()> {
    if x.len() != y.len() {
        return Err(RkError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(RkError::NoData);
    }
    if order == 0 {
        return Err(RkError::InvalidOrder(order));
    }
    if let Some(index) = x
        .iter()
        .zip(y.iter())
        .position(|(xi, yi)| !(xi.is_finite() && yi.is_finite()))
    {
        return Err(RkError::NonFiniteData {
            index,
            x: x[index],
            y: y[index],
        });
    }
    Ok(())
}

fn fit_least_squares(x: &[f64], y: &[f64], order: usize) -> Result<Vec<f64>> {
    let n = x.len();
    let mut design = DMatrix::<f64>::zeros(n, order);
    let mut row = vec![0.0; order];
    for (i, &xi) in x.iter().enumerate() {
        fill_design_row(xi, &mut row);
        for (j, &v) in row.iter().enumerate() {
            design[(i, j)] = v;
        }
    }
    let rhs = DVector::from_column_slice(y);

    let beta = solve_least_squares(&design, &rhs).ok_or(RkError::SingularSystem { n, k: order })?;
    Ok(beta.iter().copied().collect())
}
