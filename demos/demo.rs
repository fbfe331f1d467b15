// demos/demo.rs
use multistep_ode::analytics::convergence::convergence_study;
use multistep_ode::models::closure::ClosureModel;
use multistep_ode::models::forced_decay::ForcedDecay;
use multistep_ode::report::Comparison;
use multistep_ode::{Method, MethodSet};

fn main() {
    println!("Running multistep-ode Demo\n");

    // Forced decay dy/dt = -2y + e^{-t}, y(0) = 1, against its analytic solution
    let model = ForcedDecay::analytic();
    let comparison =
        Comparison::on_grid(&model, 0.1, 50, MethodSet::ALL).expect("Valid configuration");
    for line in comparison.summary_lines() {
        println!("{}", line);
    }

    println!("\nObserved orders under step halving (h = 0.1 .. 0.0125, T = 2):");
    for method in Method::ALL {
        let study = convergence_study(&model, method, 0.1, 2.0, 4).expect("Valid study");
        println!(
            "  {:<4} expected {}  fitted {:.2}",
            method.name(),
            method.order(),
            study.fitted_order().unwrap_or(f64::NAN)
        );
    }

    // Any scalar problem works; logistic growth with a closed-form solution
    let logistic = ClosureModel::new(
        |_t: f64, y: f64| y * (1.0 - y),
        |t: f64| 1.0 / (1.0 + 9.0 * (-t).exp()),
        0.1,
    );
    let comparison =
        Comparison::on_grid(&logistic, 0.25, 40, MethodSet::ALL).expect("Valid configuration");
    println!("\nLogistic growth, y(0) = 0.1:");
    for line in comparison.summary_lines() {
        println!("  {}", line);
    }
}
