// src/models/model.rs

/// A scalar initial-value problem `dy/dt = f(t, y)`, `y(0) = y0`, paired
/// with the reference curve its numerical trajectories are measured against.
pub trait OdeModel {
    /// Right-hand side `f(t, y)`.
    fn rhs(&self, t: f64, y: f64) -> f64;
    /// Reference solution used for error analysis only.
    fn exact(&self, t: f64) -> f64;
    /// Initial condition at `t = 0`.
    fn y0(&self) -> f64;
    /// Column heading for the reference curve in results tables.
    fn reference_label(&self) -> &'static str {
        "Exact"
    }
}

