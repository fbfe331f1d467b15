//! Fixed-step integrators
//!
//! Every solver returns a trajectory of `n + 1` states aligned with the grid
//! `t[i] = i * h` and starting at the model's `y0`. The free functions below
//! integrate the default forced-decay problem with `y(0) = 1`.

pub mod ab2;
pub mod ab3;
pub mod am2_pc;
pub mod method;
pub mod rk4;

use crate::models::forced_decay::ForcedDecay;

/// One RK4 step of the default problem
pub fn rk4_step(t: f64, y: f64, h: f64) -> f64 {
    rk4::Rk4::step(&ForcedDecay::default(), t, y, h)
}

pub fn rk4(h: f64, n: usize) -> Vec<f64> {
    rk4::Rk4::solve(&ForcedDecay::default(), h, n)
}

pub fn ab2(h: f64, n: usize) -> Vec<f64> {
    ab2::Ab2::solve(&ForcedDecay::default(), h, n)
}

pub fn ab3(h: f64, n: usize) -> Vec<f64> {
    ab3::Ab3::solve(&ForcedDecay::default(), h, n)
}

pub fn am2_pc(h: f64, n: usize) -> Vec<f64> {
    am2_pc::Am2Pc::solve(&ForcedDecay::default(), h, n)
}
