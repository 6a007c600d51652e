//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - handed to an outer layer for export or plotting
//! - compared across fits (e.g. during order selection)

use serde::{Deserialize, Serialize};

use crate::error::{Result, RkError};
use crate::models::evaluate;

/// Paired composition / property observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Compositions (mole fractions), conventionally in `[0, 1]`.
    pub x: Vec<f64>,
    /// Measured property at each composition (e.g. excess molar volume).
    pub y: Vec<f64>,
}

impl Sample {
    /// Build a sample, rejecting mismatched lengths instead of truncating.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RkError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// How R-K coefficients are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMethod {
    /// Closed-form linear least squares against the R-K basis functions.
    #[default]
    LeastSquares,
    /// Derivative-free simplex search starting from the all-ones vector.
    NelderMead,
}

impl FitMethod {
    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            FitMethod::LeastSquares => "least squares",
            FitMethod::NelderMead => "Nelder-Mead",
        }
    }
}

impl std::fmt::Display for FitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fitting options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    pub method: FitMethod,
    /// Iteration cap for the simplex search. Ignored by least squares.
    pub max_iters: u64,
    /// Convergence tolerance for the simplex search. Ignored by least squares.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            method: FitMethod::LeastSquares,
            max_iters: 4000,
            tolerance: 1e-14,
        }
    }
}

impl FitOptions {
    /// Options reproducing the iterative simplex path.
    pub fn nelder_mead() -> Self {
        Self {
            method: FitMethod::NelderMead,
            ..Self::default()
        }
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub bic: f64,
    pub n: usize,
}

/// A fitted Redlich-Kister expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RkFit {
    /// R-K coefficients `A[0..order]`.
    pub coeffs: Vec<f64>,
    pub method: FitMethod,
    pub quality: FitQuality,
    /// Simplex iterations performed (0 for least squares).
    pub iterations: u64,
    /// `false` when the simplex search hit its iteration cap; the coefficients
    /// are then the best estimate found.
    pub converged: bool,
}

impl RkFit {
    /// Number of R-K coefficients.
    pub fn order(&self) -> usize {
        self.coeffs.len()
    }

    /// Sample the fitted curve on `points` evenly spaced compositions in `[0, 1]`.
    pub fn curve_grid(&self, points: usize) -> (Vec<f64>, Vec<f64>) {
        let points = points.max(2);
        let xs: Vec<f64> = (0..points)
            .map(|i| i as f64 / (points as f64 - 1.0))
            .collect();
        let ys = evaluate(&self.coeffs, &xs);
        (xs, ys)
    }
}

/// Nature of a stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumKind {
    Maximum,
    Minimum,
    /// Second derivative vanishes as well (stationary inflection).
    Inflection,
}

/// A stationary point of the fitted curve inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub x: f64,
    /// Curve value at `x`.
    pub value: f64,
    pub kind: ExtremumKind,
}

/// Root filtering options for the extrema finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremaOptions {
    /// Roots with `|Im| <= imag_tol` are treated as real.
    pub imag_tol: f64,
    /// Real roots closer than this are reported once.
    pub merge_tol: f64,
    /// Real roots within this distance of 0 or 1 are treated as lying on the
    /// boundary and dropped.
    pub edge_tol: f64,
}

impl Default for ExtremaOptions {
    fn default() -> Self {
        Self {
            imag_tol: 1e-10,
            merge_tol: 1e-9,
            edge_tol: 1e-9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rejects_mismatched_lengths() {
        let err = Sample::new(vec![0.1, 0.2], vec![1.0]).unwrap_err();
        assert_eq!(err, RkError::LengthMismatch { x: 2, y: 1 });
    }

    #[test]
    fn curve_grid_spans_unit_interval() {
        let fit = RkFit {
            coeffs: vec![1.0],
            method: FitMethod::LeastSquares,
            quality: FitQuality {
                sse: 0.0,
                rmse: 0.0,
                bic: 0.0,
                n: 0,
            },
            iterations: 0,
            converged: true,
        };
        let (xs, ys) = fit.curve_grid(101);
        assert_eq!(xs.len(), 101);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[100], 1.0);
        assert!((ys[50] - 0.25).abs() < 1e-15);
    }

    #[test]
    fn fit_method_displays_label() {
        assert_eq!(FitMethod::LeastSquares.to_string(), "least squares");
        assert_eq!(format!("{}", FitMethod::NelderMead), "Nelder-Mead");
    }

    #[test]
    fn default_options_match_reference_tolerances() {
        let opts = FitOptions::nelder_mead();
        assert_eq!(opts.method, FitMethod::NelderMead);
        assert_eq!(opts.max_iters, 4000);
        assert_eq!(opts.tolerance, 1e-14);
    }
}
