//! # multistep-ode: Single-Step vs Multi-Step Integrators
//!
//! Fixed-step integration of scalar ODEs `dy/dt = f(t, y)` with the
//! classical fourth-order Runge-Kutta method and three Adams schemes, plus
//! the error analysis used to compare them.
//!
//! ## Key Features
//!
//! - **Four schemes**: RK4, two- and three-step Adams-Bashforth, and an
//!   AB2-predicted Adams-Moulton corrector (single pass)
//! - **RK4 start-up**: multi-step methods seed their history with RK4 steps
//! - **Error analysis**: pointwise and maximum error against a reference curve
//! - **Convergence studies**: observed order under step halving, in parallel
//! - **Plain CSV output**: one row per grid point, one column per method
//!
//! ## Quick Start
//!
//! ```rust
//! use multistep_ode::config::RunConfig;
//! use multistep_ode::models::forced_decay::ReferenceSolution;
//! use multistep_ode::report::Comparison;
//!
//! // dy/dt = -2y + e^{-t}, y(0) = 1, h = 0.1 up to t = 5
//! let cfg = RunConfig {
//!     h: 0.1,
//!     horizon: 5.0,
//!     reference: ReferenceSolution::Analytic,
//!     ..Default::default()
//! };
//!
//! let comparison = Comparison::run(&cfg).expect("Valid configuration");
//! for line in comparison.summary_lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Mathematical Foundation
//!
//! Every method produces a trajectory `y[0..=n]` on the uniform grid
//! `t[i] = i * h` with `y[0] = y0`. Large step sizes are allowed on purpose:
//! divergent or non-finite trajectories are results, not errors, and pass
//! through the analysis and reports unchanged.

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod grid;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod report;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{OdeError, OdeResult};
pub use models::model::OdeModel;
pub use solvers::method::{Method, MethodSet};
