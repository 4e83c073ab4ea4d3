//! Catch simulator CLI.
//!
//! Plays many fishing sessions per rod level and reports catch rates,
//! resolution times and the species mix.
//!
//! Usage:
//!   cargo run --bin catch-sim -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin catch-sim                   # 10,000 sessions at every rod level
//!   cargo run --bin catch-sim -- -r 2 -n 500    # 500 sessions with a level 2 rod
//!   cargo run --bin catch-sim -- --seed 42      # Reproducible run

use lakeside::equipment::RodLevel;
use lakeside::simulator::{run_simulation, HoldPolicy, SimConfig};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        if let Some(seed) = config.seed {
            println!("Seed: {}", seed);
        }
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-r" | "--rod" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u8>().ok().and_then(RodLevel::new) {
                        Some(rod) => config.rods = vec![rod],
                        None => {
                            eprintln!("Rod level must be 1-{}", RodLevel::MAX.get());
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-p" | "--policy" => {
                if i + 1 < args.len() {
                    config.hold_policy =
                        HoldPolicy::parse(&args[i + 1]).unwrap_or(config.hold_policy);
                    i += 1;
                }
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Lakeside Catch Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin catch-sim -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Sessions per rod level (default: 10,000)");
    println!("    -r, --rod <L>       Only simulate rod level L (1-4)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -p, --policy <P>    always | never | out-of-zone (default: always)");
    println!("    --json              Print the report as JSON");
    println!("    -h, --help          Show this help");
}
