// src/solvers/ab2.rs
//! Two-Step Adams-Bashforth
//!
//! # Mathematical Framework
//!
//! Extrapolates the derivative linearly from the two most recent points:
//! ```text
//! y_{i+1} = y_i + h/2 (3 f(t_i, y_i) - f(t_{i-1}, y_{i-1}))
//! ```
//!
//! # Start-up
//!
//! The recurrence needs two known points and the problem supplies one, so
//! `y_1` comes from a single RK4 step.
//!
//! # Convergence Properties
//!
//! - **Global order**: 2 (error ratio ≈ 4 when `h` is halved)
//! - **Cost**: 1 new function evaluation per step
//! - **Stability**: real stability interval `(-1, 0)` for `hλ`; with
//!   `λ = -2` steps of `h ≥ 0.5` amplify instead of damp

use super::rk4;
use crate::models::model::OdeModel;

/// Explicit two-step Adams-Bashforth integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct Ab2;

impl Ab2 {
    pub fn new() -> Self {
        Ab2 {}
    }

    /// Trajectory of `n + 1` states on the grid `t[i] = i * h`
    pub fn solve<M: OdeModel>(model: &M, h: f64, n: usize) -> Vec<f64> {
        let mut y = rk4::bootstrap(model, h, n, 1);
        if n < 2 {
            return y;
        }

        let mut f_prev = model.rhs(0.0, y[0]);
        for i in 1..n {
            let f_curr = model.rhs(i as f64 * h, y[i]);
            let next = y[i] + h / 2.0 * (3.0 * f_curr - f_prev);
            y.push(next);
            f_prev = f_curr;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forced_decay::{self, ForcedDecay};
    use crate::solvers::rk4::Rk4;

    #[test]
    fn test_first_points() {
        let model = ForcedDecay::default();
        let h = 1.0;
        let y = Ab2::solve(&model, h, 5);
        assert_eq!(y.len(), 6);
        assert_eq!(y[0], 1.0);
        assert_eq!(y[1], Rk4::step(&model, 0.0, 1.0, h));

        let expected = y[1]
            + h / 2.0 * (3.0 * forced_decay::rhs(1.0, y[1]) - forced_decay::rhs(0.0, y[0]));
        assert_eq!(y[2], expected);
    }

    #[test]
    fn test_short_horizons() {
        let model = ForcedDecay::default();
        assert_eq!(Ab2::solve(&model, 0.1, 0), vec![1.0]);
        assert_eq!(Ab2::solve(&model, 0.1, 1).len(), 2);
        assert_eq!(Ab2::solve(&model, 0.1, 2).len(), 3);
    }
}
