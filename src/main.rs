//! Benchmark runner for the matmul kernels.
//!
//! Times every kernel against nalgebra's product on random square matrices
//! and checks each result against it. Takes no arguments; log verbosity
//! follows `RUST_LOG`.

use approx::relative_eq;
use cache_matmul::timer::{Stats, Timer};
use cache_matmul::{Algorithm, MatrixView, MatrixViewMut, MultiplyError, Shape, TimerError};
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

struct BenchConfig {
    sizes: Vec<usize>,
    iterations: usize,
    seed: u64,
    /// Relative tolerance against the baseline product.
    max_relative: f32,
    /// Absolute tolerance, for entries close to zero.
    epsilon: f32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 256, 512],
            iterations: 5,
            seed: 0x5EED_CAFE,
            max_relative: 1e-4,
            epsilon: 1e-3,
        }
    }
}

#[derive(Error, Debug)]
enum BenchError {
    #[error(transparent)]
    Multiply(#[from] MultiplyError),
    #[error(transparent)]
    Timer(#[from] TimerError),
}

enum Outcome {
    Measured { stats: Stats, gflops: f64, ok: bool },
    Skipped(MultiplyError),
}

struct SizeResults {
    size: usize,
    baseline: Stats,
    rows: Vec<(Algorithm, Outcome)>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = BenchConfig::default();
    info!(
        sizes = ?config.sizes,
        iterations = config.iterations,
        seed = config.seed,
        "starting matmul benchmark"
    );

    println!("=== Matrix Multiplication Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut all_results = Vec::new();

    for &size in &config.sizes {
        match bench_size(&config, &mut rng, size) {
            Ok(results) => {
                print_size_table(&results);
                all_results.push(results);
            }
            Err(e) => error!(size, error = %e, "benchmark failed"),
        }
    }

    if !all_results.is_empty() {
        print_summary_table(&all_results);
    }
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DMatrix<f32> {
    DMatrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0f32..=1.0))
}

fn bench_size(config: &BenchConfig, rng: &mut StdRng, size: usize) -> Result<SizeResults, BenchError> {
    let a = random_matrix(rng, size, size);
    let b = random_matrix(rng, size, size);
    let shape = Shape::new(size, size, size);

    let mut reference = DMatrix::<f32>::zeros(size, size);
    let baseline = time_runs(config.iterations, || {
        reference = &a * &b;
        Ok(())
    })?;
    info!(size, baseline = %baseline, "baseline product done");

    let mut rows = Vec::new();
    for algorithm in Algorithm::reference_suite() {
        let outcome = match bench_algorithm(algorithm, &a, &b, config.iterations) {
            Ok((stats, c)) => {
                let ok = relative_eq!(
                    c,
                    reference,
                    epsilon = config.epsilon,
                    max_relative = config.max_relative
                );
                if !ok {
                    warn!(size, %algorithm, "result differs from baseline");
                }
                let gflops = shape.flops() / (stats.mean / 1000.0) / 1e9;
                Outcome::Measured { stats, gflops, ok }
            }
            Err(BenchError::Multiply(e)) => {
                warn!(size, %algorithm, error = %e, "skipping");
                Outcome::Skipped(e)
            }
            Err(e) => return Err(e),
        };
        rows.push((algorithm, outcome));
    }

    Ok(SizeResults {
        size,
        baseline,
        rows,
    })
}

/// Warm-up call, then `iterations` timed calls. Returns the timings and the
/// last product.
fn bench_algorithm(
    algorithm: Algorithm,
    a: &DMatrix<f32>,
    b: &DMatrix<f32>,
    iterations: usize,
) -> Result<(Stats, DMatrix<f32>), BenchError> {
    let av = MatrixView::from(a);
    let bv = MatrixView::from(b);
    let mut c = DMatrix::<f32>::zeros(a.nrows(), b.ncols());

    // Also catches shape and block errors before anything is timed.
    algorithm.multiply(&av, &bv, &mut MatrixViewMut::from(&mut c))?;

    let stats = time_runs(iterations, || {
        algorithm.multiply(&av, &bv, &mut MatrixViewMut::from(&mut c))?;
        Ok(())
    })?;
    Ok((stats, c))
}

fn time_runs<F>(iterations: usize, mut f: F) -> Result<Stats, BenchError>
where
    F: FnMut() -> Result<(), BenchError>,
{
    let mut timer = Timer::new();
    for _ in 0..iterations.max(1) {
        timer.start()?;
        let run = f();
        timer.stop()?;
        run?;
    }
    Ok(timer.stats()?)
}

fn print_size_table(results: &SizeResults) {
    println!("Matrix: {}×{}", results.size, results.size);
    println!("{}", "-".repeat(78));
    println!(
        "   {:24} {:>10} ms  ({})",
        "nalgebra (baseline)", format!("{:.3}", results.baseline.mean), results.baseline
    );

    let first_time = first_mean(results);

    for (i, (algorithm, outcome)) in results.rows.iter().enumerate() {
        match outcome {
            Outcome::Measured { stats, gflops, ok } => {
                let speedup = first_time.map_or(1.0, |t| t / stats.mean);
                println!(
                    "{}. {:24} {:10.3} ms  {:6.2} GFLOPS  ({:.1}×)  {}",
                    i + 1,
                    algorithm.to_string(),
                    stats.mean,
                    gflops,
                    speedup,
                    if *ok { "ok" } else { "error!" }
                );
            }
            Outcome::Skipped(e) => {
                println!("{}. {:24} skipped: {}", i + 1, algorithm.to_string(), e);
            }
        }
    }
    println!();
}

fn first_mean(results: &SizeResults) -> Option<f64> {
    match results.rows.first() {
        Some((_, Outcome::Measured { stats, .. })) => Some(stats.mean),
        _ => None,
    }
}

fn print_summary_table(all_results: &[SizeResults]) {
    let width = 26 + 14 * all_results.len() + 12;
    println!("\n{}", "=".repeat(width));
    println!("SUMMARY");
    println!("{}", "=".repeat(width));

    print!("\n{:<26}", "Method");
    for results in all_results {
        print!(" {:>13}", format!("{0}×{0}", results.size));
    }
    println!(" {:>11}", "Speedup");
    println!("{}", "-".repeat(width));

    let num_methods = all_results[0].rows.len();

    for method_idx in 0..num_methods {
        let algorithm = all_results[0].rows[method_idx].0;
        print!("{:<26}", algorithm.to_string());

        let mut speedups = Vec::new();
        for results in all_results {
            match &results.rows[method_idx].1 {
                Outcome::Measured { stats, gflops, .. } => {
                    print!(" {:>10.2} GF", gflops);
                    if let Some(t) = first_mean(results) {
                        speedups.push(t / stats.mean);
                    }
                }
                Outcome::Skipped(_) => print!(" {:>13}", "-"),
            }
        }

        if speedups.is_empty() {
            println!(" {:>11}", "-");
        } else {
            let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
            println!(" {:>10.1}×", avg_speedup);
        }
    }

    println!("{}", "=".repeat(width));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to Naive (row-col). Higher is better.\n");
}
