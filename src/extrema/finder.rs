//! Stationary points of a Redlich-Kister curve inside `(0, 1)`.
//!
//! The curve is converted to its power series, differentiated, and the
//! derivative's roots are found from the companion matrix. Roots with a
//! negligible imaginary part that fall strictly inside the unit interval
//! are the extrema.

use crate::domain::{ExtremaOptions, Extremum, ExtremumKind};
use crate::error::Result;
use crate::math::{polyder, polyval, roots};
use crate::models::convert;

/// Extrema of the R-K curve with default root filtering.
pub fn find_extrema(coeffs: &[f64]) -> Result<Vec<f64>> {
    find_extrema_with(coeffs, &ExtremaOptions::default())
}

/// Extrema of the R-K curve, sorted ascending.
///
/// A zero, empty or non-finite coefficient vector has no extrema.
pub fn find_extrema_with(coeffs: &[f64], opts: &ExtremaOptions) -> Result<Vec<f64>> {
    if !coeffs.iter().all(|a| a.is_finite()) {
        return Ok(Vec::new());
    }

    let slope = polyder(&convert(coeffs));
    let mut xs: Vec<f64> = roots(&slope)?
        .into_iter()
        .filter(|z| z.im.abs() <= opts.imag_tol)
        .map(|z| z.re)
        .filter(|&x| x > opts.edge_tol && x < 1.0 - opts.edge_tol)
        .collect();

    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup_by(|a, b| (*a - *b).abs() <= opts.merge_tol);
    Ok(xs)
}

/// Extrema with curve values and maximum/minimum classification.
pub fn classify_extrema(coeffs: &[f64]) -> Result<Vec<Extremum>> {
    let power = convert(coeffs);
    let curvature = polyder(&polyder(&power));
    let scale = curvature.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    let flat = scale * 1e-12;

    let out = find_extrema(coeffs)?
        .into_iter()
        .map(|x| {
            let c = polyval(&curvature, x);
            let kind = if c < -flat {
                ExtremumKind::Maximum
            } else if c > flat {
                ExtremumKind::Minimum
            } else {
                ExtremumKind::Inflection
            };
            Extremum {
                x,
                value: polyval(&power, x),
                kind,
            }
        })
        .collect();
    Ok(out)
}
