// src/output.rs
use crate::analytics::convergence::ConvergenceStudy;
use crate::error::{OdeError, OdeResult};
use crate::report::Comparison;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the comparison table: `t,Exact,RK4,AB2,AB3,AM2,Err_RK,...`
///
/// The second column is headed by the model's reference label.
///
/// Floats use the shortest representation that parses back to the same
/// value, so every column round-trips exactly.
pub fn write_comparison_to_csv<P: AsRef<Path>>(path: P, comparison: &Comparison) -> OdeResult<()> {
    let path = path.as_ref();
    write_table(path, |out| {
        writeln!(out, "{}", comparison.header().join(","))?;
        for i in 0..comparison.time_grid.len() {
            writeln!(out, "{}", join_row(&comparison.row(i)))?;
        }
        Ok(())
    })
}

/// Write one row per refinement level: `method,h,n,max_error,ratio,order`
///
/// The first level of each study has no ratio or order; those cells are empty.
pub fn write_convergence_to_csv<P: AsRef<Path>>(
    path: P,
    studies: &[ConvergenceStudy],
) -> OdeResult<()> {
    let path = path.as_ref();
    write_table(path, |out| {
        writeln!(out, "method,h,n,max_error,ratio,order")?;
        for study in studies {
            for level in &study.levels {
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    study.method.name(),
                    level.h,
                    level.steps,
                    level.max_error,
                    optional(level.ratio),
                    optional(level.order)
                )?;
            }
        }
        Ok(())
    })
}

fn write_table<F>(path: &Path, body: F) -> OdeResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |e: io::Error| OdeError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut out = BufWriter::new(File::create(path).map_err(to_error)?);
    body(&mut out).map_err(to_error)?;
    out.flush().map_err(to_error)
}

fn join_row(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_row() {
        assert_eq!(join_row(&[0.0, 1.5, -2.25]), "0,1.5,-2.25");
        assert_eq!(join_row(&[f64::INFINITY, f64::NAN]), "inf,NaN");
    }

    #[test]
    fn test_optional_cells() {
        assert_eq!(optional(None), "");
        assert_eq!(optional(Some(4.0)), "4");
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = std::env::temp_dir().join("multistep-ode-missing-dir-for-test");
        let _ = std::fs::remove_dir_all(&dir);
        let result = write_convergence_to_csv(dir.join("out.csv"), &[]);
        assert!(matches!(result, Err(OdeError::Io { .. })));
    }
}
