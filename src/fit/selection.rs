//! Order selection using BIC, and batch fitting across datasets.
//!
//! For each candidate order `k = 1..=max_order` we fit and compute:
//! - SSE / RMSE
//! - BIC = n * ln(SSE/n) + k * ln(n)
//!
//! Selection rules:
//! 1. Exclude underdetermined orders: require `n >= k + 2`
//! 2. Choose the order with minimum BIC
//! 3. If a lower order is within 2 BIC points of the best, pick the lowest such order

use rayon::prelude::*;

use crate::domain::{FitOptions, RkFit, Sample};
use crate::error::{Result, RkError};
use crate::fit::fitter::{fit_with_options, validate};

/// Minimum number of extra observations beyond the coefficient count.
const MIN_N_BUFFER: usize = 2;

/// BIC margin within which the simpler order is preferred.
const BIC_MARGIN: f64 = 2.0;

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct OrderSelection {
    pub best: RkFit,
    /// Fits for all attempted orders (after guardrails), lowest order first.
    pub fits: Vec<RkFit>,
    /// Any orders that were skipped and why (for diagnostics).
    pub skipped: Vec<(usize, String)>,
}

/// Fit every order up to `max_order` and select one by BIC.
pub fn select_order(x: &[f64], y: &[f64], max_order: usize, opts: &FitOptions) -> Result<OrderSelection> {
    validate(x, y, max_order)?;
    let n = x.len();

    // Evaluate each order independently (parallel); collect keeps order.
    let attempts: Vec<(usize, Option<Result<RkFit>>)> = (1..=max_order)
        .into_par_iter()
        .map(|k| {
            if n < k + MIN_N_BUFFER {
                (k, None)
            } else {
                (k, Some(fit_with_options(x, y, k, opts)))
            }
        })
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    for (k, attempt) in attempts {
        match attempt {
            None => skipped.push((
                k,
                format!("Underdetermined: n={n} < k+{MIN_N_BUFFER}={}", k + MIN_N_BUFFER),
            )),
            Some(Ok(fit)) => fits.push(fit),
            Some(Err(err @ RkError::SingularSystem { .. })) => skipped.push((k, err.to_string())),
            Some(Err(err)) => return Err(err),
        }
    }

    if fits.is_empty() {
        return Err(RkError::NoModel);
    }

    let best = select_by_bic(&fits);
    Ok(OrderSelection {
        best,
        fits,
        skipped,
    })
}

/// Fit the same order to many independent samples (parallel, order preserved).
pub fn fit_many(samples: &[Sample], order: usize, opts: &FitOptions) -> Vec<Result<RkFit>> {
    samples
        .par_iter()
        .map(|s| fit_with_options(&s.x, &s.y, order, opts))
        .collect()
}

/// `fits` must be non-empty and sorted by increasing order.
fn select_by_bic(fits: &[RkFit]) -> RkFit {
    let mut best = &fits[0];
    for f in &fits[1..] {
        if f.quality.bic < best.quality.bic {
            best = f;
        }
    }

    let best_bic = best.quality.bic;
    fits.iter()
        .find(|f| f.quality.bic <= best_bic + BIC_MARGIN)
        .unwrap_or(best)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Spacing, SampleSpec, generate_sample};
    use crate::domain::{FitMethod, FitQuality};
    use crate::models::evaluate;

    fn fake_fit(order: usize, bic: f64) -> RkFit {
        RkFit {
            coeffs: vec![0.0; order],
            method: FitMethod::LeastSquares,
            quality: FitQuality {
                sse: 1.0,
                rmse: 0.0,
                bic,
                n: 100,
            },
            iterations: 0,
            converged: true,
        }
    }

    #[test]
    fn bic_prefers_simpler_when_close() {
        let fits = vec![fake_fit(1, 30.0), fake_fit(2, 10.0), fake_fit(3, 11.5), fake_fit(4, 9.0)];
        let chosen = select_by_bic(&fits);
        assert_eq!(chosen.order(), 2);
    }

    #[test]
    fn bic_takes_clear_winner() {
        let fits = vec![fake_fit(1, 30.0), fake_fit(2, 10.0), fake_fit(3, 4.0)];
        assert_eq!(select_by_bic(&fits).order(), 3);
    }

    #[test]
    fn exact_data_selects_true_order() {
        let x: Vec<f64> = (0..30).map(|i| (i as f64 + 0.5) / 30.0).collect();
        let y = evaluate(&[-3.0, 1.0, -0.7], &x);
        let sel = select_order(&x, &y, 6, &FitOptions::default()).unwrap();
        assert_eq!(sel.best.order(), 3);
        assert_eq!(sel.fits.len(), 6);
        assert!(sel.skipped.is_empty());
    }

    #[test]
    fn noisy_data_never_underfits() {
        let spec = SampleSpec {
            coeffs: vec![-3.2, 0.9, -0.6],
            count: 40,
            noise_sigma: 1e-3,
            seed: 7,
            spacing: Spacing::Uniform,
        };
        let sample = generate_sample(&spec).unwrap();
        let sel = select_order(&sample.x, &sample.y, 6, &FitOptions::default()).unwrap();
        assert!(sel.best.order() >= 3);
        assert!(sel.best.quality.rmse < 5e-3);
    }

    #[test]
    fn skips_underdetermined_orders() {
        let x = [0.1, 0.3, 0.5, 0.7];
        let y = evaluate(&[1.0, 0.5], &x);
        let sel = select_order(&x, &y, 4, &FitOptions::default()).unwrap();
        assert_eq!(sel.fits.len(), 2);
        let skipped: Vec<usize> = sel.skipped.iter().map(|(k, _)| *k).collect();
        assert_eq!(skipped, vec![3, 4]);
    }

    #[test]
    fn no_admissible_order_is_an_error() {
        let err = select_order(&[0.5], &[0.1], 2, &FitOptions::default()).unwrap_err();
        assert_eq!(err, RkError::NoModel);
    }

    #[test]
    fn nan_observation_fails_fast() {
        let x = [0.1, 0.3, 0.5, 0.7, 0.9];
        let y = [0.1, 0.2, 0.2, f64::NAN, 0.05];
        let err = select_order(&x, &y, 3, &FitOptions::default()).unwrap_err();
        assert!(matches!(err, RkError::NonFiniteData { index: 3, .. }), "{err:?}");
    }

    #[test]
    fn fit_many_preserves_input_order() {
        let x: Vec<f64> = (0..12).map(|i| (i as f64 + 0.5) / 12.0).collect();
        let samples: Vec<Sample> = [1.0, -2.0, 3.5]
            .iter()
            .map(|&a| Sample::new(x.clone(), evaluate(&[a], &x)).unwrap())
            .collect();

        let fits = fit_many(&samples, 1, &FitOptions::default());
        assert_eq!(fits.len(), 3);
        for (fit, want) in fits.iter().zip([1.0, -2.0, 3.5]) {
            let fit = fit.as_ref().unwrap();
            assert!((fit.coeffs[0] - want).abs() < 1e-12);
        }
    }
}
