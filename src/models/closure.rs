// src/models/closure.rs
use super::model::OdeModel;

/// Scalar problem assembled from a right-hand side and reference closure
///
/// ```rust
/// use multistep_ode::models::closure::ClosureModel;
/// use multistep_ode::models::model::OdeModel;
///
/// // dy/dt = -y, y(0) = 1
/// let decay = ClosureModel::new(|_t: f64, y: f64| -y, |t: f64| (-t).exp(), 1.0);
/// assert_eq!(decay.rhs(0.0, 2.0), -2.0);
/// ```
pub struct ClosureModel<F, E>
where
    F: Fn(f64, f64) -> f64,
    E: Fn(f64) -> f64,
{
    rhs: F,
    exact: E,
    y0: f64,
}

impl<F, E> ClosureModel<F, E>
where
    F: Fn(f64, f64) -> f64,
    E: Fn(f64) -> f64,
{
    pub fn new(rhs: F, exact: E, y0: f64) -> Self {
        ClosureModel { rhs, exact, y0 }
    }
}

impl<F, E> OdeModel for ClosureModel<F, E>
where
    F: Fn(f64, f64) -> f64,
    E: Fn(f64) -> f64,
{
    fn rhs(&self, t: f64, y: f64) -> f64 {
        (self.rhs)(t, y)
    }

    fn exact(&self, t: f64) -> f64 {
        (self.exact)(t)
    }

    fn y0(&self) -> f64 {
        self.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_model_delegates() {
        let model = ClosureModel::new(|t: f64, y: f64| t + y, |t: f64| 2.0 * t, 0.25);
        assert_eq!(model.rhs(1.0, 2.0), 3.0);
        assert_eq!(model.exact(1.5), 3.0);
        assert_eq!(model.y0(), 0.25);
    }
}
