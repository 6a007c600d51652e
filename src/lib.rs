//! `rk-curves` library crate.
//!
//! Redlich-Kister fitting of excess mixture properties (e.g. excess molar
//! volume) against composition:
//!
//! - evaluate `x(1-x) Σ A[i] (1-2x)^i` at given compositions
//! - fit `A` to measured data by least squares
//! - convert `A` to ordinary power-series coefficients
//! - locate the curve's extrema in `(0, 1)`
//!
//! Reading data files and plotting are left to the caller; everything here
//! works on plain `f64` slices.

pub mod data;
pub mod domain;
pub mod error;
pub mod extrema;
pub mod fit;
pub mod math;
pub mod models;

pub use data::{SampleSpec, Spacing, generate_sample};
pub use domain::{
    ExtremaOptions, Extremum, ExtremumKind, FitMethod, FitOptions, FitQuality, RkFit, Sample,
};
pub use error::{Result, RkError};
pub use extrema::{classify_extrema, find_extrema, find_extrema_with};
pub use fit::{OrderSelection, fit, fit_many, fit_with_options, residuals, select_order};
pub use math::polyval;
pub use models::{convert, convert_reduced, evaluate, evaluate_at};
