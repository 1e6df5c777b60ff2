use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use widgetry::registry::ComponentRegistry;
use widgetry::widget;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Widgetry workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the widget module's contract/CID manifest as JSON
    Manifest {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Manifest { out } => write_manifest(out.as_deref())?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn write_manifest(out: Option<&Path>) -> Result<()> {
    let mut registry = ComponentRegistry::new();
    registry
        .register_module(&widget::WIDGET_MODULE)
        .context("widget module failed to load")?;
    let json = registry.manifest().to_json()?;
    registry.shutdown();

    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Manifest written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", "maybe_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("cargo bench exited with {status}");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

#[derive(Serialize)]
struct Row {
    benchmark: String,
    mean_ns: f64,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;
    writeln!(file, "# Benchmark Report")?;
    writeln!(file, "| Benchmark | Mean |")?;
    writeln!(file, "|---|---|")?;
    for (name, mean_ns) in &results {
        writeln!(file, "| {name} | {} |", format_ns(*mean_ns))?;
    }

    let rows: Vec<Row> = results
        .into_iter()
        .map(|(benchmark, mean_ns)| Row { benchmark, mean_ns })
        .collect();
    fs::write("benchmark_results/report.json", serde_json::to_string_pretty(&rows)?)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.1} ns")
    }
}

// Layout: target/criterion/<group>/<bench>/new/estimates.json
fn collect_results(dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = baseline_dir.parent() else { continue };
        let name = bench_dir
            .strip_prefix("target/criterion")
            .unwrap_or(bench_dir)
            .display()
            .to_string();

        let Ok(content) = fs::read_to_string(&path) else { continue };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) else { continue };
        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results.insert(name, mean);
        }
    }
}
