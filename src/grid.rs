// src/grid.rs
//! Uniform time grids
//!
//! Every trajectory produced by the solvers is index-aligned with the grid
//! `t[i] = i * h`, `i = 0..=n`. Grid points are computed by multiplication
//! rather than by accumulating `h`, so `t[i]` carries no drift for large `n`.

use crate::error::{validation::*, OdeResult};

/// Relative slack for rounding `horizon / h` up to the next integer
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Absolute cap on that slack, in steps
const STEP_COUNT_MAX_SLACK: f64 = 1e-6;

/// Number of whole steps of size `h` that fit in `[0, horizon]`
///
/// `n = floor(horizon / h)`, except that a quotient short of the next
/// integer by less than `1e-9 * max(quotient, 1)`, and by less than `1e-6`
/// of a step, is rounded up to it. `horizon = 0.3`, `h = 0.1` gives 3 steps
/// rather than 2.
pub fn steps_for_horizon(h: f64, horizon: f64) -> OdeResult<usize> {
    validate_positive("h", h)?;
    validate_non_negative("horizon", horizon)?;

    let quotient = horizon / h;
    validate_finite("horizon / h", quotient)?;
    let next = quotient.ceil();
    let gap = next - quotient;
    let whole = if gap < STEP_COUNT_TOLERANCE * quotient.max(1.0) && gap < STEP_COUNT_MAX_SLACK {
        next
    } else {
        quotient.floor()
    };
    let steps = whole as usize;
    validate_steps(steps)?;
    Ok(steps)
}

/// Time points `t[i] = i * h` for `i` in `0..=n`
pub fn time_grid(h: f64, n: usize) -> Vec<f64> {
    (0..=n).map(|i| i as f64 * h).collect()
}
