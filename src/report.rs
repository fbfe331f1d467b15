// src/report.rs
//! Side-by-side comparison of the selected methods on one grid

use crate::analytics::convergence::{convergence_study, ConvergenceStudy};
use crate::analytics::error_analysis::{compute_error, max_error};
use crate::config::RunConfig;
use crate::error::OdeResult;
use crate::grid::{steps_for_horizon, time_grid};
use crate::models::model::OdeModel;
use crate::solvers::method::{Method, MethodSet};

/// Trajectory, error sequence and maximum error of one method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRun {
    pub method: Method,
    pub trajectory: Vec<f64>,
    pub errors: Vec<f64>,
    pub max_error: f64,
}

/// All selected methods run on the same time grid
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub h: f64,
    pub time_grid: Vec<f64>,
    /// Heading of the reference column, `Exact` for the closed form
    pub reference_label: &'static str,
    /// Reference curve evaluated on the time grid
    pub exact: Vec<f64>,
    pub runs: Vec<MethodRun>,
}

impl Comparison {
    /// Run every method in `cfg.methods` on the problem `cfg` describes
    pub fn run(cfg: &RunConfig) -> OdeResult<Comparison> {
        cfg.validate()?;
        let n = steps_for_horizon(cfg.h, cfg.horizon)?;
        Comparison::on_grid(&cfg.model(), cfg.h, n, cfg.methods)
    }

    /// Run `methods` for `n` steps of size `h`
    pub fn on_grid<M: OdeModel>(
        model: &M,
        h: f64,
        n: usize,
        methods: MethodSet,
    ) -> OdeResult<Comparison> {
        let grid = time_grid(h, n);
        let exact: Vec<f64> = grid.iter().map(|&t| model.exact(t)).collect();

        let runs = methods
            .methods()
            .into_iter()
            .map(|method| -> OdeResult<MethodRun> {
                let trajectory = method.solve(model, h, n);
                let errors = compute_error(&trajectory, &grid, |t| model.exact(t))?;
                let max = max_error(&errors)?;
                Ok(MethodRun {
                    method,
                    trajectory,
                    errors,
                    max_error: max,
                })
            })
            .collect::<OdeResult<Vec<_>>>()?;

        Ok(Comparison {
            h,
            time_grid: grid,
            reference_label: model.reference_label(),
            exact,
            runs,
        })
    }

    pub fn steps(&self) -> usize {
        self.time_grid.len() - 1
    }

    pub fn run_for(&self, method: Method) -> Option<&MethodRun> {
        self.runs.iter().find(|r| r.method == method)
    }

    /// Column names: `t`, the reference label, one per trajectory, one per
    /// error sequence
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = vec!["t", self.reference_label];
        header.extend(self.runs.iter().map(|r| r.method.name()));
        header.extend(self.runs.iter().map(|r| r.method.error_label()));
        header
    }

    /// Values of row `i` in [`Comparison::header`] order
    pub fn row(&self, i: usize) -> Vec<f64> {
        let mut row = vec![self.time_grid[i], self.exact[i]];
        row.extend(self.runs.iter().map(|r| r.trajectory[i]));
        row.extend(self.runs.iter().map(|r| r.errors[i]));
        row
    }

    /// Console summary: step size, then each method's maximum error
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Step size h = {}", self.h)];
        lines.extend(self.runs.iter().map(|r| {
            format!(
                "{:<17}{}",
                format!("Max Error {}:", r.method.name()),
                r.max_error
            )
        }));
        lines
    }
}

/// Convergence study of every method in `cfg.methods`, starting at `cfg.h`
///
/// Runs on [`RunConfig::study_model`] whatever `cfg.reference` selects.
pub fn convergence_studies(cfg: &RunConfig) -> OdeResult<Vec<ConvergenceStudy>> {
    let model = cfg.study_model();
    cfg.methods
        .methods()
        .into_iter()
        .map(|method| convergence_study(&model, method, cfg.h, cfg.horizon, cfg.study_levels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forced_decay::{self, ReferenceSolution};

    #[test]
    fn test_full_comparison_layout() {
        let cmp = Comparison::run(&RunConfig::default()).unwrap();
        assert_eq!(cmp.steps(), 5);
        assert_eq!(
            cmp.header(),
            vec![
                "t", "Exact", "RK4", "AB2", "AB3", "AM2", "Err_RK", "Err_AB2", "Err_AB3",
                "Err_AM2"
            ]
        );
        let row = cmp.row(0);
        assert_eq!(row.len(), 10);
        assert_eq!(row[0], 0.0);
        assert_eq!(row[1], forced_decay::exact(0.0));
        assert!(row[2..6].iter().all(|&y| y == 1.0));
        assert!(row[6..].iter().all(|&e| e == 0.5));
    }

    #[test]
    fn test_subset_keeps_column_order() {
        let cfg = RunConfig {
            methods: MethodSet::AM2 | MethodSet::RK4,
            ..Default::default()
        };
        let cmp = Comparison::run(&cfg).unwrap();
        assert_eq!(cmp.header(), vec!["t", "Exact", "RK4", "AM2", "Err_RK", "Err_AM2"]);
        assert!(cmp.run_for(Method::Ab2).is_none());
    }

    #[test]
    fn test_summary_lines() {
        let cmp = Comparison::run(&RunConfig::default()).unwrap();
        let lines = cmp.summary_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Step size h = 1");
        assert!(lines[1].starts_with("Max Error RK4:   "));
        assert!(lines[4].starts_with("Max Error AM2:   "));
    }

    #[test]
    fn test_run_follows_config_problem() {
        let cfg = RunConfig {
            y0: 2.0,
            reference: ReferenceSolution::Analytic,
            ..Default::default()
        };
        let cmp = Comparison::run(&cfg).unwrap();
        assert_eq!(cmp.header()[1], "Analytic");
        let row = cmp.row(0);
        assert_eq!(row[1], 2.0);
        assert!(row[2..6].iter().all(|&y| y == 2.0));
        assert!(row[6..].iter().all(|&e| e == 0.0));
    }

    #[test]
    fn test_exact_column_holds_closed_form() {
        let cmp = Comparison::run(&RunConfig::default()).unwrap();
        assert_eq!(cmp.header()[1], "Exact");
        for i in 0..=cmp.steps() {
            assert_eq!(cmp.row(i)[1], forced_decay::exact(cmp.time_grid[i]));
        }
    }
}
