//! Power-series polynomial helpers.
//!
//! Coefficients are stored in ascending order: `c[k]` multiplies `x^k`.

use nalgebra::linalg::Schur;
use nalgebra::{Complex, DMatrix};

use crate::error::{Result, RkError};

/// Sweep limit for the Schur iteration on the companion matrix.
const SCHUR_MAX_ITERS: usize = 10_000;

/// Evaluate `Σ c[k] x^k` by Horner's scheme.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Derivative coefficients: `d[k] = (k + 1) c[k + 1]`.
///
/// A constant (or empty) polynomial differentiates to the empty vector.
pub fn polyder(coeffs: &[f64]) -> Vec<f64> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| k as f64 * c)
        .collect()
}

/// Drop leading (highest-degree) coefficients that are negligible relative to
/// the largest coefficient. Returns an empty slice for the zero polynomial.
pub fn trim_leading(coeffs: &[f64]) -> &[f64] {
    let scale = coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if scale == 0.0 {
        return &[];
    }
    let cutoff = scale * f64::EPSILON;
    let end = coeffs
        .iter()
        .rposition(|c| c.abs() > cutoff)
        .map_or(0, |i| i + 1);
    &coeffs[..end]
}

/// All complex roots of `Σ c[k] x^k` via companion-matrix eigenvalues.
///
/// For the monic polynomial `x^d + a[d-1] x^(d-1) + ... + a[0]` the companion
/// matrix has ones on the sub-diagonal and `-a` in the last column:
///
/// ```text
/// C = [ 0  0  ...  0  -a0     ]
///     [ 1  0  ...  0  -a1     ]
///     [ .  .  ...  .   .      ]
///     [ 0  0  ...  1  -a(d-1) ]
/// ```
///
/// Negligible leading coefficients are trimmed first, so a zero or constant
/// polynomial has no roots.
pub fn roots(coeffs: &[f64]) -> Result<Vec<Complex<f64>>> {
    let c = trim_leading(coeffs);
    if c.len() < 2 {
        return Ok(Vec::new());
    }

    let degree = c.len() - 1;
    let lead = c[degree];
    if degree == 1 {
        return Ok(vec![Complex::new(-c[0] / lead, 0.0)]);
    }

    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..degree {
        companion[(i, degree - 1)] = -c[i] / lead;
    }

    let schur = Schur::try_new(companion, f64::EPSILON, SCHUR_MAX_ITERS).ok_or(RkError::RootFinding)?;
    Ok(schur.complex_eigenvalues().iter().copied().collect())
}
