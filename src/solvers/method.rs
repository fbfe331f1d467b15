// src/solvers/method.rs
use super::{ab2::Ab2, ab3::Ab3, am2_pc::Am2Pc, rk4::Rk4};
use crate::error::{OdeError, OdeResult};
use crate::models::model::OdeModel;
use bitflags::bitflags;

/// Integration scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Rk4,
    Ab2,
    Ab3,
    Am2Pc,
}

impl Method {
    /// All methods in results-table column order
    pub const ALL: [Method; 4] = [Method::Rk4, Method::Ab2, Method::Ab3, Method::Am2Pc];

    /// Column label of the trajectory in the results table
    pub fn name(&self) -> &'static str {
        match self {
            Method::Rk4 => "RK4",
            Method::Ab2 => "AB2",
            Method::Ab3 => "AB3",
            Method::Am2Pc => "AM2",
        }
    }

    /// Column label of the error sequence in the results table
    pub fn error_label(&self) -> &'static str {
        match self {
            Method::Rk4 => "Err_RK",
            Method::Ab2 => "Err_AB2",
            Method::Ab3 => "Err_AB3",
            Method::Am2Pc => "Err_AM2",
        }
    }

    /// Theoretical global order of accuracy
    pub fn order(&self) -> u32 {
        match self {
            Method::Rk4 => 4,
            Method::Ab2 | Method::Am2Pc => 2,
            Method::Ab3 => 3,
        }
    }

    /// RK4 steps taken before the multi-step recurrence applies
    pub fn bootstrap_steps(&self) -> usize {
        match self {
            Method::Rk4 => 0,
            Method::Ab2 | Method::Am2Pc => 1,
            Method::Ab3 => 2,
        }
    }

    pub fn flag(&self) -> MethodSet {
        match self {
            Method::Rk4 => MethodSet::RK4,
            Method::Ab2 => MethodSet::AB2,
            Method::Ab3 => MethodSet::AB3,
            Method::Am2Pc => MethodSet::AM2,
        }
    }

    /// Trajectory of `n + 1` states on the grid `t[i] = i * h`
    pub fn solve<M: OdeModel>(&self, model: &M, h: f64, n: usize) -> Vec<f64> {
        match self {
            Method::Rk4 => Rk4::solve(model, h, n),
            Method::Ab2 => Ab2::solve(model, h, n),
            Method::Ab3 => Ab3::solve(model, h, n),
            Method::Am2Pc => Am2Pc::solve(model, h, n),
        }
    }

    /// Parse a method name, case-insensitively (`rk4`, `ab2`, `ab3`, `am2`)
    pub fn from_name(name: &str) -> OdeResult<Method> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rk4" | "rk" => Ok(Method::Rk4),
            "ab2" => Ok(Method::Ab2),
            "ab3" => Ok(Method::Ab3),
            "am2" | "am2pc" | "am2-pc" | "am2_pc" => Ok(Method::Am2Pc),
            other => Err(OdeError::InvalidConfiguration {
                field: "methods".to_string(),
                reason: format!("unknown method '{}' (expected rk4, ab2, ab3 or am2)", other),
            }),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodSet: u32 {
        const RK4 = 1 << 0;
        const AB2 = 1 << 1;
        const AB3 = 1 << 2;
        const AM2 = 1 << 3;
        const ALL = Self::RK4.bits() | Self::AB2.bits() | Self::AB3.bits() | Self::AM2.bits();
    }
}

impl MethodSet {
    /// Selected methods in results-table column order
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .iter()
            .copied()
            .filter(|m| self.contains(m.flag()))
            .collect()
    }

    /// Parse a comma-separated list such as `rk4,ab3`
    pub fn parse_list(list: &str) -> OdeResult<MethodSet> {
        let mut set = MethodSet::empty();
        for name in list.split(',').filter(|s| !s.trim().is_empty()) {
            set |= Method::from_name(name)?.flag();
        }
        if set.is_empty() {
            return Err(OdeError::InvalidConfiguration {
                field: "methods".to_string(),
                reason: "at least one method must be selected".to_string(),
            });
        }
        Ok(set)
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        MethodSet::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forced_decay::ForcedDecay;

    #[test]
    fn test_labels_follow_table_order() {
        let names: Vec<_> = Method::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["RK4", "AB2", "AB3", "AM2"]);
        let errs: Vec<_> = Method::ALL.iter().map(|m| m.error_label()).collect();
        assert_eq!(errs, ["Err_RK", "Err_AB2", "Err_AB3", "Err_AM2"]);
    }

    #[test]
    fn test_parse_list() {
        let set = MethodSet::parse_list("AB3, rk4").unwrap();
        assert_eq!(set.methods(), vec![Method::Rk4, Method::Ab3]);
        assert_eq!(MethodSet::parse_list("rk4,ab2,ab3,am2").unwrap(), MethodSet::ALL);
        assert!(MethodSet::parse_list("").is_err());
        assert!(MethodSet::parse_list("euler").is_err());
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(MethodSet::default().methods(), Method::ALL.to_vec());
    }

    #[test]
    fn test_solve_dispatch() {
        let model = ForcedDecay::default();
        for method in Method::ALL {
            let y = method.solve(&model, 0.5, 6);
            assert_eq!(y.len(), 7);
            assert_eq!(y[0], 1.0);
        }
    }
}
