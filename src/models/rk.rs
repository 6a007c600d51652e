//! Redlich-Kister polynomial evaluation.
//!
//! ```text
//! f(x) = x (1 - x) Σ_{i=0}^{n-1} A[i] (1 - 2x)^i
//! ```
//!
//! The fitter relies on two primitive operations:
//! - build a design row for a given composition (for least squares)
//! - predict `f(x)` given coefficients (for residuals and plots)
//!
//! Compositions outside `[0, 1]` are evaluated as-is; NaN/Inf propagate.

/// Evaluate the R-K polynomial at a single composition.
///
/// An empty coefficient vector evaluates to zero.
pub fn evaluate_at(coeffs: &[f64], x: f64) -> f64 {
    let u = 1.0 - 2.0 * x;
    let sum = coeffs.iter().rev().fold(0.0, |acc, &a| acc * u + a);
    x * (1.0 - x) * sum
}

/// Evaluate the R-K polynomial at every composition in `xs`.
pub fn evaluate(coeffs: &[f64], xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| evaluate_at(coeffs, x)).collect()
}

/// Fill a design row with the basis values `x(1-x)(1-2x)^i`, `i = 0..out.len()`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    let u = 1.0 - 2.0 * x;
    let mut term = x * (1.0 - x);
    for v in out.iter_mut() {
        *v = term;
        term *= u;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishes_at_pure_components() {
        for coeffs in [vec![1.0], vec![-2.5, 0.3, 7.0], vec![1e3, -1e3, 5.0, 0.1]] {
            assert_eq!(evaluate_at(&coeffs, 0.0), 0.0);
            assert_eq!(evaluate_at(&coeffs, 1.0), 0.0);
        }
    }

    #[test]
    fn single_coefficient_is_parabola() {
        let xs = [0.1, 0.25, 0.5, 0.9];
        let ys = evaluate(&[1.0], &xs);
        for (x, y) in xs.iter().zip(ys) {
            assert!((y - (x - x * x)).abs() < 1e-15);
        }
    }

    #[test]
    fn matches_direct_sum() {
        let a = [-3.1, 0.4, 1.2];
        let x: f64 = 0.3;
        let u = 1.0 - 2.0 * x;
        let direct = x * (1.0 - x) * (a[0] + a[1] * u + a[2] * u * u);
        assert!((evaluate_at(&a, x) - direct).abs() < 1e-14);
    }

    #[test]
    fn outside_domain_and_non_finite() {
        assert!(evaluate_at(&[1.0], 1.5).is_finite());
        assert!(evaluate_at(&[1.0], f64::NAN).is_nan());
        assert!(evaluate_at(&[f64::INFINITY], 0.5).is_infinite());
        assert_eq!(evaluate_at(&[], 0.4), 0.0);
    }

    #[test]
    fn design_row_dot_coeffs_is_prediction() {
        let a = [0.7, -1.1, 2.0, 0.05];
        let mut row = [0.0; 4];
        fill_design_row(0.37, &mut row);
        let dot: f64 = row.iter().zip(a.iter()).map(|(r, c)| r * c).sum();
        assert!((dot - evaluate_at(&a, 0.37)).abs() < 1e-14);
    }
}
