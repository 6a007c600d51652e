//! Least squares solver.
//!
//! The R-K model is linear in its coefficients:
//!
//! ```text
//! minimize Σ (y_i - x_i^T A)^2,   x_i = [ x(1-x)(1-2x)^0, ..., x(1-x)(1-2x)^(n-1) ]
//! ```
//!
//! Implementation choices:
//! - We solve via SVD so tall design matrices (more rows than columns) work
//!   without forming the normal equations.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Rank deficiency is reported rather than papered over with a
//!   minimum-norm solution; callers surface it as a singular-system error.

use nalgebra::{DMatrix, DVector};

/// Relative singular-value cutoff for the rank test.
const RANK_RTOL: f64 = 1e-13;

/// Sweep limit for the SVD iteration; non-finite input can otherwise spin.
const SVD_MAX_ITERS: usize = 10_000;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the design matrix is rank deficient, the SVD fails to
/// converge, or the solution is not finite.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.ncols() == 0 || x.nrows() < x.ncols() {
        return None;
    }

    let svd = x.clone().try_svd(true, true, f64::EPSILON, SVD_MAX_ITERS)?;

    let sigma_max = svd.singular_values.max();
    if !(sigma_max.is_finite() && sigma_max > 0.0) {
        return None;
    }
    let cutoff = sigma_max * RANK_RTOL;
    if svd.rank(cutoff) < x.ncols() {
        return None;
    }

    let beta = svd.solve(y, cutoff).ok()?;
    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}
