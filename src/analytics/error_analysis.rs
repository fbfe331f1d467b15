// src/analytics/error_analysis.rs
//! Pointwise and maximum error against a reference curve

use crate::error::{OdeError, OdeResult};

/// Absolute error `|y[i] - exact(t[i])|` at every grid point
///
/// The trajectory and time grid must be index-aligned. Non-finite states
/// yield non-finite errors; nothing is clamped.
pub fn compute_error<E>(trajectory: &[f64], time_grid: &[f64], exact: E) -> OdeResult<Vec<f64>>
where
    E: Fn(f64) -> f64,
{
    if trajectory.len() != time_grid.len() {
        return Err(OdeError::LengthMismatch {
            expected: time_grid.len(),
            actual: trajectory.len(),
        });
    }

    Ok(trajectory
        .iter()
        .zip(time_grid)
        .map(|(&y, &t)| (y - exact(t)).abs())
        .collect())
}

/// Largest element of an error sequence
///
/// Returns NaN if any element is NaN, so a diverged run can never report a
/// finite maximum.
pub fn max_error(errors: &[f64]) -> OdeResult<f64> {
    let (first, rest) = errors.split_first().ok_or_else(|| OdeError::EmptySequence {
        context: "max_error".to_string(),
    })?;

    Ok(rest.iter().fold(*first, |acc, &e| {
        if acc.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            acc.max(e)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::time_grid;
    use crate::models::forced_decay;

    #[test]
    fn test_compute_error_against_closed_form() {
        let t = time_grid(1.0, 2);
        let y = vec![1.0, 0.5, 0.1];
        let err = compute_error(&y, &t, forced_decay::exact).unwrap();
        assert_eq!(err.len(), 3);
        assert_eq!(err[0], 0.5);
        for i in 0..3 {
            assert_eq!(err[i], (y[i] - forced_decay::exact(t[i])).abs());
        }
    }

    #[test]
    fn test_compute_error_length_mismatch() {
        let t = time_grid(0.1, 5);
        let result = compute_error(&[1.0, 2.0], &t, |_| 0.0);
        assert_eq!(
            result,
            Err(OdeError::LengthMismatch {
                expected: 6,
                actual: 2
            })
        );
    }

    #[test]
    fn test_max_error() {
        assert_eq!(max_error(&[0.1, 0.7, 0.3]).unwrap(), 0.7);
        assert_eq!(max_error(&[2.0]).unwrap(), 2.0);
        assert_eq!(max_error(&[0.0, f64::INFINITY, 1.0]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_max_error_propagates_nan() {
        assert!(max_error(&[0.1, f64::NAN, 0.3]).unwrap().is_nan());
        assert!(max_error(&[f64::NAN, 0.3]).unwrap().is_nan());
    }

    #[test]
    fn test_max_error_empty() {
        assert!(matches!(
            max_error(&[]),
            Err(OdeError::EmptySequence { .. })
        ));
    }
}
