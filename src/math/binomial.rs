//! Binomial expansion matrices for the Redlich-Kister basis.
//!
//! Row `i` of the expansion matrix holds the power-series coefficients of
//! `(1 - 2x)^i`:
//!
//! ```text
//! (1 - 2x)^i = Σ_k C(i, k) (-2)^k x^k
//! ```
//!
//! Multiplying by the `x(1 - x) = x - x^2` prefactor shifts each row one
//! column right and subtracts the same row shifted two columns right.

use nalgebra::DMatrix;

/// Lower-triangular Pascal matrix: `P[i][k] = C(i, k)`.
///
/// Built row by row from `C(i, k) = C(i-1, k-1) + C(i-1, k)` so every entry is
/// an exact integer in `f64` for the sizes used here.
pub fn pascal_lower(n: usize) -> DMatrix<f64> {
    let mut p = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        p[(i, 0)] = 1.0;
        for k in 1..=i {
            p[(i, k)] = p[(i - 1, k - 1)] + if k < i { p[(i - 1, k)] } else { 0.0 };
        }
    }
    p
}

/// Expansion of `(1 - 2x)^i` for `i = 0..n` into powers of `x` (`n × n`).
pub fn rk_expansion_matrix(n: usize) -> DMatrix<f64> {
    let mut b = pascal_lower(n);
    for k in 0..n {
        let scale = (-2.0_f64).powi(k as i32);
        b.column_mut(k).scale_mut(scale);
    }
    b
}

/// Expansion of `x(1 - x)(1 - 2x)^i` for `i = 0..n` into powers of `x`
/// (`n × (n + 2)`).
pub fn rk_prefactor_matrix(n: usize) -> DMatrix<f64> {
    let b0 = rk_expansion_matrix(n);
    let mut b = DMatrix::<f64>::zeros(n, n + 2);
    for i in 0..n {
        for k in 0..n {
            let v = b0[(i, k)];
            b[(i, k + 1)] += v;
            b[(i, k + 2)] -= v;
        }
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_rows_match_binomials() {
        let p = pascal_lower(5);
        let row4 = [1.0, 4.0, 6.0, 4.0, 1.0];
        for (k, &c) in row4.iter().enumerate() {
            assert_eq!(p[(4, k)], c);
        }
        assert_eq!(p[(1, 2)], 0.0);
    }

    #[test]
    fn expansion_of_square() {
        // (1 - 2x)^2 = 1 - 4x + 4x^2
        let b = rk_expansion_matrix(3);
        assert_eq!(b[(2, 0)], 1.0);
        assert_eq!(b[(2, 1)], -4.0);
        assert_eq!(b[(2, 2)], 4.0);
    }

    #[test]
    fn prefactor_matrix_shape_and_first_row() {
        let b = rk_prefactor_matrix(3);
        assert_eq!(b.nrows(), 3);
        assert_eq!(b.ncols(), 5);
        // x(1 - x) = x - x^2
        assert_eq!(b.row(0).iter().copied().collect::<Vec<_>>(), vec![0.0, 1.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_order_gives_empty_rows() {
        let b = rk_prefactor_matrix(0);
        assert_eq!(b.nrows(), 0);
        assert_eq!(b.ncols(), 2);
    }
}
