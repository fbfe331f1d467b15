// scripts/benchmark.rs
use multistep_ode::analytics::error_analysis::{compute_error, max_error};
use multistep_ode::grid::{steps_for_horizon, time_grid};
use multistep_ode::math_utils::{median, Timer};
use multistep_ode::models::forced_decay::ForcedDecay;
use multistep_ode::{Method, OdeModel};
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

const HORIZON: f64 = 5.0;
const REPEATS: usize = 7;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    method: Method,
    h: f64,
    steps: usize,
    time_ms: f64,
    throughput_steps_per_sec: f64,
    max_error: f64,
}

fn bench_method(model: &ForcedDecay, method: Method, h: f64) -> BenchmarkResult {
    let steps = steps_for_horizon(h, HORIZON).expect("Valid step size");
    let grid = time_grid(h, steps);

    let mut timer = Timer::new();
    let mut samples = Vec::with_capacity(REPEATS);
    for _ in 0..REPEATS {
        timer.start();
        let trajectory = method.solve(model, h, steps);
        samples.push(timer.elapsed_ms());
        std::hint::black_box(&trajectory);
    }
    let trajectory = method.solve(model, h, steps);

    let time_ms = median(&samples).unwrap_or(f64::NAN);
    let errors = compute_error(&trajectory, &grid, |t| model.exact(t)).expect("Aligned grid");

    BenchmarkResult {
        method,
        h,
        steps,
        time_ms,
        throughput_steps_per_sec: steps as f64 / (time_ms / 1000.0),
        max_error: max_error(&errors).expect("Non-empty trajectory"),
    }
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let model = ForcedDecay::analytic();
    let step_sizes = [1e-2, 1e-3, 1e-4, 1e-5];

    let mut results = Vec::new();
    for &h in &step_sizes {
        println!("Running benchmarks with h = {}...", h);
        // methods at one step size are timed in parallel; each owns its buffers
        let mut batch: Vec<BenchmarkResult> = Method::ALL[..]
            .par_iter()
            .map(|&method| bench_method(&model, method, h))
            .collect();
        results.append(&mut batch);
    }
    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    // Write system information as comments
    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Method,h,Steps,Time_ms,Throughput_steps_per_sec,Max_Error")?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.4},{:.0},{:e}",
            result.method.name(),
            result.h,
            result.steps,
            result.time_ms,
            result.throughput_steps_per_sec,
            result.max_error
        )?;
    }

    println!("Results written to {}", filename);
    Ok(())
}

fn main() {
    println!("multistep-ode Benchmark Suite");
    println!("=============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_benchmarks();

    println!("\n{:=<72}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<72}", "");
    println!(
        "{:<8} {:>10} {:>10} {:>12} {:>15} {:>12}",
        "Method", "h", "Steps", "Time (ms)", "Steps/sec", "Max Error"
    );
    println!("{:-<72}", "");
    for result in &results {
        println!(
            "{:<8} {:>10} {:>10} {:>12.4} {:>15.0} {:>12.3e}",
            result.method.name(),
            result.h,
            result.steps,
            result.time_ms,
            result.throughput_steps_per_sec,
            result.max_error
        );
    }
    println!("{:=<72}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    if let Err(e) = write_results_to_csv(&results, &system_info, &filename) {
        eprintln!("Could not write {}: {}", filename, e);
        std::process::exit(1);
    }

    println!("\nBenchmark complete!");
    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}
