// src/config.rs
use crate::error::{validation::*, OdeError, OdeResult};
use crate::grid::steps_for_horizon;
use crate::models::forced_decay::{ForcedDecay, ReferenceSolution};
use crate::solvers::method::MethodSet;

/// Default results table written by the `multistep` binary
pub const DEFAULT_OUTPUT: &str = "multistep_results.csv";

/// Default convergence table written with `--study`
pub const DEFAULT_STUDY_OUTPUT: &str = "convergence_results.csv";

/// Configuration of a single comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Step size `h`
    pub h: f64,
    /// Horizon `T`; the run takes `floor(T / h)` steps
    pub horizon: f64,
    pub y0: f64,
    pub methods: MethodSet,
    pub reference: ReferenceSolution,
    pub output: String,
    /// Also run a convergence study starting at `h`
    pub study: bool,
    /// Number of step sizes in the convergence study
    pub study_levels: usize,
}

impl RunConfig {
    /// Validate the run configuration
    pub fn validate(&self) -> OdeResult<()> {
        validate_positive("h", self.h)?;
        validate_positive("horizon", self.horizon)?;
        validate_finite("y0", self.y0)?;

        if self.methods.is_empty() {
            return Err(OdeError::InvalidConfiguration {
                field: "methods".to_string(),
                reason: "at least one method must be selected".to_string(),
            });
        }
        if self.output.trim().is_empty() {
            return Err(OdeError::InvalidConfiguration {
                field: "output".to_string(),
                reason: "must name a file".to_string(),
            });
        }
        if self.study && self.study_levels < 2 {
            return Err(OdeError::InvalidConfiguration {
                field: "levels".to_string(),
                reason: "a convergence study needs at least 2 step sizes".to_string(),
            });
        }

        steps_for_horizon(self.h, self.horizon).map(|_| ())
    }

    /// Number of steps `n = floor(horizon / h)`
    pub fn steps(&self) -> OdeResult<usize> {
        steps_for_horizon(self.h, self.horizon)
    }

    /// The forced-decay problem this configuration describes
    pub fn model(&self) -> ForcedDecay {
        ForcedDecay::new(self.y0, self.reference)
    }

    /// The problem a convergence study runs on
    ///
    /// Always measured against the initial-value solution: the closed form
    /// misses `y0` by a constant, which would pin every level's error.
    pub fn study_model(&self) -> ForcedDecay {
        ForcedDecay::new(self.y0, ReferenceSolution::Analytic)
    }

    /// Build a configuration from command-line arguments (program name excluded)
    ///
    /// Recognised flags: `--h`, `--horizon`, `--y0`, `--methods`,
    /// `--reference`, `--output`, `--levels` and `--study`. Values may be
    /// given as `--flag value` or `--flag=value`.
    pub fn from_args<I, S>(args: I) -> OdeResult<RunConfig>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cfg = RunConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };

            if flag == "--study" {
                if inline.is_some() {
                    return Err(OdeError::InvalidConfiguration {
                        field: "study".to_string(),
                        reason: "takes no value".to_string(),
                    });
                }
                cfg.study = true;
                continue;
            }

            let value = match inline {
                Some(value) => value,
                None => args.next().ok_or_else(|| OdeError::InvalidConfiguration {
                    field: flag.trim_start_matches('-').to_string(),
                    reason: "missing value".to_string(),
                })?,
            };

            match flag.as_str() {
                "--h" => cfg.h = parse_f64("h", &value)?,
                "--horizon" | "--T" => cfg.horizon = parse_f64("horizon", &value)?,
                "--y0" => cfg.y0 = parse_f64("y0", &value)?,
                "--methods" => cfg.methods = MethodSet::parse_list(&value)?,
                "--reference" => {
                    cfg.reference = ReferenceSolution::from_name(&value).ok_or_else(|| {
                        OdeError::InvalidConfiguration {
                            field: "reference".to_string(),
                            reason: format!(
                                "unknown reference '{}' (expected closed-form or analytic)",
                                value
                            ),
                        }
                    })?
                }
                "--output" | "-o" => cfg.output = value,
                "--levels" => {
                    cfg.study_levels =
                        value
                            .parse()
                            .map_err(|_| OdeError::InvalidConfiguration {
                                field: "levels".to_string(),
                                reason: format!("'{}' is not a non-negative integer", value),
                            })?
                }
                other => {
                    return Err(OdeError::InvalidConfiguration {
                        field: other.to_string(),
                        reason: "unknown option".to_string(),
                    })
                }
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_f64(name: &str, value: &str) -> OdeResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| OdeError::InvalidConfiguration {
            field: name.to_string(),
            reason: format!("'{}' is not a number", value),
        })
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            h: 1.0,
            horizon: 5.0,
            y0: 1.0,
            methods: MethodSet::ALL,
            reference: ReferenceSolution::ClosedForm,
            output: DEFAULT_OUTPUT.to_string(),
            study: false,
            study_levels: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = RunConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.steps().unwrap(), 5);
        assert_eq!(cfg.output, "multistep_results.csv");
    }

    #[test]
    fn test_from_args() {
        let cfg = RunConfig::from_args([
            "--h",
            "0.1",
            "--horizon=2.5",
            "--methods",
            "rk4,am2",
            "--reference",
            "analytic",
            "--study",
        ])
        .unwrap();
        assert_eq!(cfg.h, 0.1);
        assert_eq!(cfg.horizon, 2.5);
        assert_eq!(cfg.steps().unwrap(), 25);
        assert_eq!(cfg.methods, MethodSet::RK4 | MethodSet::AM2);
        assert_eq!(cfg.reference, ReferenceSolution::Analytic);
        assert!(cfg.study);
    }

    #[test]
    fn test_from_args_rejects_bad_input() {
        assert!(RunConfig::from_args(["--h", "-1"]).is_err());
        assert!(RunConfig::from_args(["--h", "abc"]).is_err());
        assert!(RunConfig::from_args(["--h"]).is_err());
        assert!(RunConfig::from_args(["--bogus", "1"]).is_err());
        assert!(RunConfig::from_args(["--reference", "numerical"]).is_err());
        assert!(RunConfig::from_args(["--study", "--levels", "1"]).is_err());
    }

    #[test]
    fn test_study_flag_takes_no_value() {
        let err = RunConfig::from_args(["--study=false"]).unwrap_err();
        assert_eq!(
            err,
            OdeError::InvalidConfiguration {
                field: "study".to_string(),
                reason: "takes no value".to_string(),
            }
        );
        assert!(RunConfig::from_args(["--study"]).unwrap().study);
    }

    #[test]
    fn test_study_model_ignores_selected_reference() {
        let cfg = RunConfig::from_args(["--y0", "2", "--reference", "closed-form"]).unwrap();
        assert_eq!(cfg.model().reference, ReferenceSolution::ClosedForm);
        let study = cfg.study_model();
        assert_eq!(study.reference, ReferenceSolution::Analytic);
        assert_eq!(study.y0, 2.0);
    }

    #[test]
    fn test_empty_args_give_default() {
        let cfg = RunConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn test_validate_rejects_empty_method_set() {
        let cfg = RunConfig {
            methods: MethodSet::empty(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
