// src/analytics/convergence.rs
//! Empirical order of convergence
//!
//! # Method
//!
//! A method of global order `p` has error `E(h) ≈ C h^p`. Running it at
//! `h, h/2, h/4, ...` over the same horizon gives
//! ```text
//! E(h) / E(h/2) ≈ 2^p,    p ≈ log2(E(h) / E(h/2))
//! ```
//! and, across all levels, `p` is the least-squares slope of `ln E`
//! against `ln h`.
//!
//! Levels are independent runs and are evaluated in parallel with Rayon.

use crate::analytics::error_analysis::{compute_error, max_error};
use crate::error::{validation::*, OdeError, OdeResult};
use crate::grid::{steps_for_horizon, time_grid};
use crate::models::model::OdeModel;
use crate::solvers::method::Method;
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// One refinement level of a convergence study
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceLevel {
    pub h: f64,
    pub steps: usize,
    pub max_error: f64,
    /// `max_error` of the previous (coarser) level divided by this one
    pub ratio: Option<f64>,
    /// `log2(ratio)`
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    pub method: Method,
    pub horizon: f64,
    pub levels: Vec<ConvergenceLevel>,
}

impl ConvergenceStudy {
    /// Least-squares slope of `ln(max_error)` against `ln(h)`
    ///
    /// `None` when fewer than two levels have a positive, finite error.
    pub fn fitted_order(&self) -> Option<f64> {
        let (ln_h, ln_err): (Vec<f64>, Vec<f64>) = self
            .levels
            .iter()
            .filter(|l| l.max_error.is_finite() && l.max_error > 0.0)
            .map(|l| (l.h.ln(), l.max_error.ln()))
            .unzip();

        if ln_h.len() < 2 {
            return None;
        }
        let var_h = ln_h.iter().variance();
        if var_h == 0.0 {
            return None;
        }
        Some(ln_h.iter().covariance(ln_err.iter()) / var_h)
    }

    /// Observed order at the finest level
    pub fn final_order(&self) -> Option<f64> {
        self.levels.last().and_then(|l| l.order)
    }
}

/// Run `method` at `h0, h0/2, ..., h0/2^(levels-1)` over `[0, horizon]`
pub fn convergence_study<M>(
    model: &M,
    method: Method,
    h0: f64,
    horizon: f64,
    levels: usize,
) -> OdeResult<ConvergenceStudy>
where
    M: OdeModel + Sync,
{
    validate_positive("h0", h0)?;
    validate_positive("horizon", horizon)?;
    if levels < 2 {
        return Err(OdeError::InvalidConfiguration {
            field: "levels".to_string(),
            reason: "a convergence study needs at least 2 step sizes".to_string(),
        });
    }

    let runs: Vec<(f64, usize, f64)> = (0..levels)
        .into_par_iter()
        .map(|level| -> OdeResult<(f64, usize, f64)> {
            let h = h0 / 2f64.powi(level as i32);
            let n = steps_for_horizon(h, horizon)?;
            let grid = time_grid(h, n);
            let trajectory = method.solve(model, h, n);
            let errors = compute_error(&trajectory, &grid, |t| model.exact(t))?;
            Ok((h, n, max_error(&errors)?))
        })
        .collect::<OdeResult<Vec<_>>>()?;

    let mut study_levels: Vec<ConvergenceLevel> = Vec::with_capacity(runs.len());
    for (h, steps, err) in runs {
        let ratio = study_levels.last().map(|prev| prev.max_error / err);
        study_levels.push(ConvergenceLevel {
            h,
            steps,
            max_error: err,
            ratio,
            order: ratio.map(f64::log2),
        });
    }

    Ok(ConvergenceStudy {
        method,
        horizon,
        levels: study_levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::closure::ClosureModel;
    use crate::models::forced_decay::ForcedDecay;

    #[test]
    fn test_levels_halve_step_size() {
        let study = convergence_study(&ForcedDecay::analytic(), Method::Ab2, 0.1, 2.0, 4).unwrap();
        assert_eq!(study.levels.len(), 4);
        let steps: Vec<usize> = study.levels.iter().map(|l| l.steps).collect();
        assert_eq!(steps, vec![20, 40, 80, 160]);
        assert!(study.levels[0].ratio.is_none());
        assert!(study.levels[1..].iter().all(|l| l.ratio.is_some()));
    }

    #[test]
    fn test_fitted_order_of_exact_power_law() {
        let levels = [0.4, 0.2, 0.1]
            .iter()
            .map(|&h| ConvergenceLevel {
                h,
                steps: 0,
                max_error: 3.0 * h * h,
                ratio: None,
                order: None,
            })
            .collect();
        let study = ConvergenceStudy {
            method: Method::Ab2,
            horizon: 1.0,
            levels,
        };
        assert!((study.fitted_order().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitted_order_needs_two_points() {
        let study = ConvergenceStudy {
            method: Method::Rk4,
            horizon: 1.0,
            levels: vec![ConvergenceLevel {
                h: 0.1,
                steps: 10,
                max_error: 1e-3,
                ratio: None,
                order: None,
            }],
        };
        assert!(study.fitted_order().is_none());
    }

    #[test]
    fn test_rejects_single_level() {
        let model = ClosureModel::new(|_t: f64, y: f64| -y, |t: f64| (-t).exp(), 1.0);
        assert!(convergence_study(&model, Method::Rk4, 0.1, 1.0, 1).is_err());
        assert!(convergence_study(&model, Method::Rk4, 0.0, 1.0, 3).is_err());
    }
}
