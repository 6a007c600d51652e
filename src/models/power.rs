//! Conversion of Redlich-Kister coefficients to power-series coefficients.
//!
//! The transform is linear and depends only on the number of coefficients:
//!
//! ```text
//! P = A · B
//! ```
//!
//! where `B` is `math::rk_prefactor_matrix(n)` for the full form and
//! `math::rk_expansion_matrix(n)` for the reduced form (no `x(1-x)` prefactor).

use nalgebra::{DMatrix, DVector};

use crate::math::{rk_expansion_matrix, rk_prefactor_matrix};

/// Power-series coefficients of `x(1-x) Σ A[i] (1-2x)^i`.
///
/// The output has `coeffs.len() + 2` entries; `out[k]` multiplies `x^k`.
pub fn convert(coeffs: &[f64]) -> Vec<f64> {
    apply(coeffs, &rk_prefactor_matrix(coeffs.len()))
}

/// Power-series coefficients of `Σ A[i] (1-2x)^i` (no `x(1-x)` prefactor).
///
/// The output has `coeffs.len()` entries.
pub fn convert_reduced(coeffs: &[f64]) -> Vec<f64> {
    apply(coeffs, &rk_expansion_matrix(coeffs.len()))
}

fn apply(coeffs: &[f64], b: &DMatrix<f64>) -> Vec<f64> {
    let a = DVector::from_column_slice(coeffs);
    let p = b.tr_mul(&a);
    p.iter().copied().collect()
}
