use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "wgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the algorithm benchmark suite and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also run with the `parallel` feature and compare
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Run the test suite under default features, then under `parallel,tracing`
    Test,
}

/// A criterion baseline name and the crate features it is built with.
struct Config {
    baseline: &'static str,
    features: Option<&'static str>,
}

const SEQUENTIAL: Config = Config {
    baseline: "sequential",
    features: None,
};

const PARALLEL: Config = Config {
    baseline: "parallel",
    features: Some("parallel"),
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            parallel,
        } => {
            let configs: Vec<&Config> = if parallel {
                vec![&SEQUENTIAL, &PARALLEL]
            } else {
                vec![&SEQUENTIAL]
            };
            if !report_only {
                run_benchmarks(&configs, quick)?;
            }
            generate_report(&configs)?;
        }
        Commands::Test => run_tests()?,
    }

    Ok(())
}

fn run_tests() -> Result<()> {
    for features in [None, Some("parallel,tracing")] {
        let label = features.unwrap_or("default");
        println!("\n>>> Testing with features: {label}");

        let mut cmd = Command::new("cargo");
        cmd.args(["test", "--package", "wgraph"]);
        if let Some(features) = features {
            cmd.args(["--features", features]);
        }
        let status = cmd
            .status()
            .with_context(|| format!("failed to run tests with {label} features"))?;
        if !status.success() {
            anyhow::bail!("tests failed with {label} features");
        }
    }
    Ok(())
}

fn run_benchmarks(configs: &[&Config], quick: bool) -> Result<()> {
    println!("Running benchmark suite...");

    for config in configs {
        println!("\n>>> Benchmarking baseline: {}", config.baseline);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", "suite"]);
        if let Some(features) = config.features {
            cmd.args(["--features", features]);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(config.baseline);

        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench for {}", config.baseline))?;

        if status.success() {
            println!("Finished {} in {:.2?}", config.baseline, start.elapsed());
        } else {
            eprintln!("Warning: benchmark failed for {}", config.baseline);
        }
    }

    Ok(())
}

/// Benchmark id (`group/function/param`) -> baseline -> elements per second.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(configs: &[&Config]) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# wgraph Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Benchmark |")?;
    for config in configs {
        write!(file, " {} (elem/s) |", config.baseline)?;
    }
    if configs.len() > 1 {
        write!(file, " speedup |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in configs {
        write!(file, "---|")?;
    }
    if configs.len() > 1 {
        write!(file, "---|")?;
    }
    writeln!(file)?;

    for (bench, by_baseline) in &results {
        write!(file, "| {bench} |")?;
        for config in configs {
            match by_baseline.get(config.baseline) {
                Some(rate) => write!(file, " {} |", human_rate(*rate))?,
                None => write!(file, " N/A |")?,
            }
        }
        if configs.len() > 1 {
            let base = by_baseline.get(SEQUENTIAL.baseline).copied().unwrap_or(0.0);
            match by_baseline.get(PARALLEL.baseline) {
                Some(par) if base > 0.0 => write!(file, " **{:.2}x** |", par / base)?,
                _ => write!(file, " - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn human_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}

/// Walks criterion output; layout is `<bench path>/<baseline>/estimates.json`
/// with `benchmark.json` beside the estimates.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if baseline == "report" || baseline == "new" || baseline == "base" || baseline == "change" {
            continue;
        }

        let Some(bench_dir) = baseline_dir.parent() else {
            continue;
        };
        let bench_id = bench_dir
            .strip_prefix(root)
            .unwrap_or(bench_dir)
            .to_string_lossy()
            .replace('\\', "/");

        let elements = read_json(&baseline_dir.join("benchmark.json"))?
            .and_then(|json| json.pointer("/throughput/Elements").and_then(serde_json::Value::as_f64))
            .unwrap_or(1.0);
        let Some(time_ns) = read_json(&path)?
            .and_then(|json| json.pointer("/mean/point_estimate").and_then(serde_json::Value::as_f64))
        else {
            continue;
        };

        if time_ns > 0.0 {
            results
                .entry(bench_id)
                .or_default()
                .insert(baseline.to_string(), elements * 1e9 / time_ns);
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> Result<Option<serde_json::Value>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let json = serde_json::from_str(&content)
        .with_context(|| format!("malformed criterion output in {}", path.display()))?;
    Ok(Some(json))
}
