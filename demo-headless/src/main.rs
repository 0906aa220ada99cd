use clap::Parser;
use coal_sim_core::{
    analyze_batch, analyze_image, analyze_manual, AnalysisOptions, BatchStatus, ManualInput,
    Scenario,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Coal spontaneous-combustion risk analysis demo
#[derive(Parser, Debug)]
#[command(name = "coal-sim-demo")]
#[command(about = "Coal spontaneous-combustion thermal simulation demo", long_about = None)]
struct Args {
    /// Coal sample images to analyze (one for a full report, several for a
    /// ranked batch)
    images: Vec<PathBuf>,

    /// Environmental scenario (`normal`, `hot_day`, `humid`,
    /// `poor_ventilation`); unknown names fall back to normal
    #[arg(short, long, default_value = "normal")]
    scenario: String,

    /// Seed for deterministic sampling and simulation
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of images analyzed in batch mode
    #[arg(long, default_value_t = 10)]
    sample: usize,

    /// Write the three-panel thermal comparison strip here (single-image mode)
    #[arg(short, long)]
    render: Option<PathBuf>,

    /// Emit the full result bundle as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Moisture content in % (manual mode, requires the other three)
    #[arg(long)]
    moisture: Option<f64>,

    /// Volatile matter in % (manual mode)
    #[arg(long)]
    volatile_matter: Option<f64>,

    /// Ash content in % (manual mode)
    #[arg(long)]
    ash: Option<f64>,

    /// Fixed carbon in % (manual mode)
    #[arg(long)]
    fixed_carbon: Option<f64>,

    /// Oxygen content in %
    #[arg(long, default_value_t = 20.9)]
    oxygen: f64,

    /// Ambient temperature in °C
    #[arg(long, default_value_t = 25.0)]
    ambient_temp: f64,

    /// Ventilation rate in m/s
    #[arg(long, default_value_t = 1.0)]
    ventilation: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let manual = match (
        args.moisture,
        args.volatile_matter,
        args.ash,
        args.fixed_carbon,
    ) {
        (Some(moisture), Some(volatile_matter), Some(ash), Some(fixed_carbon)) => {
            Some(ManualInput {
                moisture,
                volatile_matter,
                ash,
                fixed_carbon,
                oxygen: args.oxygen,
                ambient_temperature: args.ambient_temp,
                ventilation_rate: args.ventilation,
            })
        }
        (None, None, None, None) => None,
        _ => {
            eprintln!("Manual mode needs all of --moisture, --volatile-matter, --ash, --fixed-carbon");
            return ExitCode::FAILURE;
        }
    };

    if let Some(input) = manual {
        return run_manual(&input, args.json);
    }

    let scenario = Scenario::from_name(&args.scenario);
    match args.images.len() {
        0 => {
            eprintln!("Nothing to do: pass image paths or the four manual proximate values");
            ExitCode::FAILURE
        }
        1 => run_single(&args.images[0], scenario, args.render, args.seed, args.json),
        _ => run_batch(&args.images, args.sample, args.seed, args.json),
    }
}

fn run_manual(input: &ManualInput, json: bool) -> ExitCode {
    let report = analyze_manual(input);
    if json {
        println!("{}", serde_json::to_string_pretty(&report).expect("serializable report"));
        return ExitCode::SUCCESS;
    }

    println!("=== Chemical Risk Assessment ===");
    println!("CPT:             {:.1} °C", report.indices.cpt);
    match report.indices.liability_index {
        Some(li) => println!("Liability index: {li:.2}"),
        None => println!("Liability index: n/a (zero ash)"),
    }
    println!("WITS index:      {:.2}", report.indices.wits_index);
    match report.indices.olpinski_index {
        Some(oi) => println!("Olpinski index:  {oi:.3} (informational)"),
        None => println!("Olpinski index:  n/a"),
    }
    println!(
        "Risk: {} ({:.0} points, {})",
        report.risk.level,
        report.risk.score,
        report.risk.color_tag()
    );
    print_factors_and_recs(
        report.risk.factors.iter().map(ToString::to_string),
        &report.recommendations,
    );
    ExitCode::SUCCESS
}

fn run_single(
    path: &Path,
    scenario: Scenario,
    render: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> ExitCode {
    let options = AnalysisOptions {
        render_path: render,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match analyze_image(path, scenario, &options, &mut rng) {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report).expect("serializable report"));
                return ExitCode::SUCCESS;
            }
            println!("=== Image Analysis: {} ===", path.display());
            println!("Scenario:        {}", report.scenario);
            println!(
                "Ambient/max/avg: {:.1} / {:.1} / {:.1} °C",
                report.environment.ambient_temperature,
                report.temperature_stats.max_temp,
                report.temperature_stats.avg_temp
            );
            println!(
                "Hot spots: {}   Critical area: {:.1}%",
                report.temperature_stats.hot_spot_count,
                report.temperature_stats.critical_area_percentage
            );
            println!(
                "Chemical {:.0} + Thermal {:.0} -> Combined {:.1} ({})",
                report.chemical.score,
                report.thermal.score,
                report.combined.score,
                report.combined.level
            );
            print_factors_and_recs(
                report.combined.factors.iter().map(ToString::to_string),
                &report.recommendations,
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Analysis failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_batch(paths: &[PathBuf], sample: usize, seed: Option<u64>, json: bool) -> ExitCode {
    let summary = analyze_batch(paths, sample, seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary).expect("serializable summary"));
        return ExitCode::SUCCESS;
    }

    match summary.status() {
        BatchStatus::NothingProcessed => {
            println!("No images were submitted for analysis");
            ExitCode::SUCCESS
        }
        BatchStatus::AllFailed => {
            eprintln!(
                "No samples could be processed successfully ({} attempted)",
                summary.attempted
            );
            ExitCode::FAILURE
        }
        BatchStatus::Ranked => {
            println!(
                "=== Batch Analysis: {} ranked, {} failed ===",
                summary.entries.len(),
                summary.failed
            );
            println!("{:<32} {:<16} {:>8} {:>8} {:>8}", "image", "scenario", "score", "max°C", "CPT");
            for entry in &summary.entries {
                let name = entry
                    .path
                    .file_name()
                    .map_or_else(|| entry.path.display().to_string(), |n| n.to_string_lossy().into_owned());
                println!(
                    "{:<32} {:<16} {:>8.1} {:>8.1} {:>8.1}",
                    name,
                    entry.scenario.name(),
                    entry.combined_score,
                    entry.max_temp,
                    entry.cpt
                );
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_factors_and_recs<I: Iterator<Item = String>>(factors: I, recommendations: &[String]) {
    println!("Risk factors:");
    let mut any = false;
    for factor in factors {
        println!("  - {factor}");
        any = true;
    }
    if !any {
        println!("  (none)");
    }
    println!("Recommendations:");
    for rec in recommendations {
        println!("  - {rec}");
    }
}
