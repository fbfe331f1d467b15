// src/solvers/ab3.rs
//! Three-Step Adams-Bashforth
//!
//! # Mathematical Framework
//!
//! Quadratic extrapolation of the derivative through the last three points:
//! ```text
//! y_{i+1} = y_i + h/12 (23 f_i - 16 f_{i-1} + 5 f_{i-2})
//! ```
//! where `f_k = f(t_k, y_k)`.
//!
//! # Start-up
//!
//! `y_1` and `y_2` come from consecutive RK4 steps. For very short
//! trajectories the bootstrap error can dominate the total error.
//!
//! # Convergence Properties
//!
//! - **Global order**: 3 (error ratio ≈ 8 when `h` is halved)
//! - **Stability**: real stability interval `(-6/11, 0)` for `hλ`, narrower
//!   than AB2

use super::rk4;
use crate::models::model::OdeModel;

/// Explicit three-step Adams-Bashforth integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct Ab3;

impl Ab3 {
    pub fn new() -> Self {
        Ab3 {}
    }

    /// Trajectory of `n + 1` states on the grid `t[i] = i * h`
    pub fn solve<M: OdeModel>(model: &M, h: f64, n: usize) -> Vec<f64> {
        let mut y = rk4::bootstrap(model, h, n, 2);
        if n < 3 {
            return y;
        }

        // derivative history, oldest first
        let mut f_hist = [model.rhs(0.0, y[0]), model.rhs(h, y[1])];
        for i in 2..n {
            let f_curr = model.rhs(i as f64 * h, y[i]);
            let next = y[i] + h / 12.0 * (23.0 * f_curr - 16.0 * f_hist[1] + 5.0 * f_hist[0]);
            y.push(next);
            f_hist = [f_hist[1], f_curr];
        }
        y
    }
}
