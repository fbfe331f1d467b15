// scripts/multistep.rs
use multistep_ode::analytics::convergence::ConvergenceStudy;
use multistep_ode::config::{RunConfig, DEFAULT_STUDY_OUTPUT};
use multistep_ode::output;
use multistep_ode::report::{convergence_studies, Comparison};
use multistep_ode::OdeResult;
use std::process;

const USAGE: &str = "Usage: multistep [--h <step>] [--horizon <T>] [--y0 <value>] \
[--methods rk4,ab2,ab3,am2] [--reference closed-form|analytic] [--output <file>] \
[--study] [--levels <count>]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return;
    }

    let cfg = match RunConfig::from_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(&cfg) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cfg: &RunConfig) -> OdeResult<()> {
    let comparison = Comparison::run(cfg)?;

    for line in comparison.summary_lines() {
        println!("{}", line);
    }

    output::write_comparison_to_csv(&cfg.output, &comparison)?;
    println!("Results saved to {}", cfg.output);

    if cfg.study {
        let studies = run_study(cfg)?;
        output::write_convergence_to_csv(DEFAULT_STUDY_OUTPUT, &studies)?;
        println!("Convergence study saved to {}", DEFAULT_STUDY_OUTPUT);
    }

    println!("Run with --h 0.1 for accuracy and --h 1.0 to see stability issues.");
    Ok(())
}

fn run_study(cfg: &RunConfig) -> OdeResult<Vec<ConvergenceStudy>> {
    println!(
        "\nConvergence study against the {} reference ({} levels from h = {})",
        cfg.study_model().reference.name(),
        cfg.study_levels,
        cfg.h
    );
    println!("{:<6} {:>12} {:>12} {:>10}", "Method", "Finest h", "Max Error", "Order");
    println!("{:-<43}", "");

    let studies = convergence_studies(cfg)?;
    for study in &studies {
        let finest = study.levels.last().map(|l| (l.h, l.max_error));
        let (h, err) = finest.unwrap_or((cfg.h, f64::NAN));
        println!(
            "{:<6} {:>12.6} {:>12.4e} {:>10}",
            study.method.name(),
            h,
            err,
            study
                .fitted_order()
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "N/A".to_string())
        );
    }
    Ok(studies)
}
