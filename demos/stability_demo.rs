// demos/stability_demo.rs
//! Step sizes beyond the Adams stability intervals
//!
//! For `dy/dt = -2y + ...` the homogeneous part has `λ = -2`. AB2 is stable
//! for `hλ` in `(-1, 0)` and AB3 for `(-6/11, 0)`, so at `h = 1` both
//! amplify the error every step while RK4 still damps it. The growing values
//! are printed as computed.

use multistep_ode::models::forced_decay::ForcedDecay;
use multistep_ode::report::Comparison;
use multistep_ode::MethodSet;

fn main() {
    let model = ForcedDecay::analytic();

    for &(h, n) in &[(1.0, 5), (1.0, 40), (0.5, 40), (0.1, 200)] {
        let comparison = Comparison::on_grid(&model, h, n, MethodSet::ALL).expect("Valid grid");
        println!("h = {:<4} n = {:<4} T = {}", h, n, h * n as f64);
        for run in &comparison.runs {
            let last = run.trajectory.last().copied().unwrap_or(f64::NAN);
            println!(
                "  {:<4} y(T) = {:>14.6e}   max error = {:.3e}",
                run.method.name(),
                last,
                run.max_error
            );
        }
        println!();
    }
}
