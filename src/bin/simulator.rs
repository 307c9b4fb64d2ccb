//! Fly Warrior headless simulator CLI.
//!
//! Plays seeded runs with the autopilot and prints a balance report.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulator                     # 100 random runs
//!   cargo run --bin simulator -- -n 20 --seed 42  # Reproducible batch
//!   cargo run --bin simulator -- --config my.json --json

use flywarrior::core::config::GameConfig;
use flywarrior::simulator::{run_simulation, SimConfig};
use std::env;
use std::io;
use std::path::Path;
use std::process;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'simulator --help' for usage.");
            process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              FLY WARRIOR SIMULATOR                            ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Max Frames:     {}", config.max_frames_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if config.verbosity == 0 {
        println!(
            "runs={} avg_score={:.0} avg_frames={:.0} best={} timed_out={}",
            report.num_runs,
            report.avg_score,
            report.avg_frames,
            report.best_score,
            report.runs_timed_out
        );
    } else {
        println!("{}", report.to_text());
    }

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, &mut i, "--runs")?;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, &mut i, "--seed")?);
            }
            "-f" | "--frames" => {
                config.max_frames_per_run = parse_value(args, &mut i, "--frames")?;
            }
            "--config" => {
                let path: String = parse_value(args, &mut i, "--config")?;
                config.game = GameConfig::load(Path::new(&path))
                    .map_err(|e| format!("Could not load config {}: {}", path, e))?;
            }
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "--json" => write_json = true,
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((config, write_json))
}

/// Read the value following a flag and advance the cursor past it.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse()
        .map_err(|_| format!("{} got an invalid value: {}", flag, raw))
}

fn print_help() {
    println!("Fly Warrior Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulator -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of runs (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -f, --frames <F>    Max frames per run (default: 37,500)");
    println!("    --config <FILE>     Load game tuning from a JSON file");
    println!("    -v, --verbose       Print every run");
    println!("    -q, --quiet         Print a one-line summary");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
