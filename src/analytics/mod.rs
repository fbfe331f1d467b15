pub mod convergence;
pub mod error_analysis;
