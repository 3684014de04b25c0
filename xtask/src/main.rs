use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "branded workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the branded-vs-raw overhead benchmark and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "brand_overhead";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/brand_overhead.md";

/// The part of criterion's `estimates.json` we read.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean times in nanoseconds for one `group/input` pair.
#[derive(Default)]
struct Pair {
    raw: Option<f64>,
    branded: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmark(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmark(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.5");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let pairs = collect_pairs(criterion_dir)?;

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Brand Overhead Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Input | Raw (ns) | Branded (ns) | Branded / Raw |")?;
    writeln!(file, "|---|---|---|---|---|")?;

    for ((group, input), pair) in &pairs {
        let (Some(raw), Some(branded)) = (pair.raw, pair.branded) else {
            writeln!(file, "| {group} | {input} | N/A | N/A | - |")?;
            continue;
        };
        let ratio = if raw > 0.0 { branded / raw } else { 0.0 };
        writeln!(file, "| {group} | {input} | {raw:.1} | {branded:.1} | **{ratio:.3}x** |")?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Reads `<group>/<raw|branded>/<input>/new/estimates.json` under `root`.
fn collect_pairs(root: &Path) -> Result<BTreeMap<(String, String), Pair>> {
    let mut pairs: BTreeMap<(String, String), Pair> = BTreeMap::new();

    for group in read_dirs(root)? {
        let group_name = file_name(&group);
        if group_name == "report" {
            continue;
        }

        for variant in read_dirs(&group)? {
            let variant_name = file_name(&variant);

            for input in read_dirs(&variant)? {
                let estimates_path = input.join("new").join("estimates.json");
                let Ok(content) = fs::read_to_string(&estimates_path) else {
                    continue;
                };
                let estimates: Estimates = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", estimates_path.display()))?;

                let pair = pairs.entry((group_name.clone(), file_name(&input))).or_default();
                match variant_name.as_str() {
                    "raw" => pair.raw = Some(estimates.mean.point_estimate),
                    "branded" => pair.branded = Some(estimates.mean.point_estimate),
                    _ => {}
                }
            }
        }
    }

    Ok(pairs)
}

fn read_dirs(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
