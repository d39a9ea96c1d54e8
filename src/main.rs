//! Estimate the uncollided transmission through a slab and compare it to the analytic value.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use shield::{ExecutionMode, SimulationConfig};
use tracing::{Level, debug};

fn cli() -> Command {
    Command::new("shield-rs")
        .about("Monte Carlo estimate of particle transmission through a 1-D attenuating slab")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("1000000")
                .help("Number of particles to simulate"),
        )
        .arg(
            Arg::new("thickness")
                .long("thickness")
                .short('t')
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("1.0")
                .help("Slab thickness, in the same units as the mean free path"),
        )
        .arg(
            Arg::new("mean-free-path")
                .long("mean-free-path")
                .short('m')
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("1.0")
                .help("Mean distance between interactions in the slab material"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed the generator for a reproducible run"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_parser(value_parser!(ExecutionMode))
                .default_value("serial")
                .help("Execution mode: serial or parallel"),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Partitions in parallel mode (0 uses one per thread)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log sampling details to stderr"),
        )
}

fn config_from_matches(matches: &ArgMatches) -> SimulationConfig {
    // Every option except the seed has a default, so these are always present
    SimulationConfig {
        count: matches.get_one::<i64>("count").copied().unwrap_or(SimulationConfig::DEFAULT_COUNT),
        thickness: matches
            .get_one::<f64>("thickness")
            .copied()
            .unwrap_or(SimulationConfig::DEFAULT_THICKNESS),
        mean_free_path: matches
            .get_one::<f64>("mean-free-path")
            .copied()
            .unwrap_or(SimulationConfig::DEFAULT_MEAN_FREE_PATH),
        seed: matches.get_one::<u64>("seed").copied(),
        mode: matches.get_one::<ExecutionMode>("mode").copied().unwrap_or_default(),
        workers: matches.get_one::<usize>("workers").copied().unwrap_or(0),
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    // Logs go to stderr so stdout carries only the report
    let level = if matches.get_flag("verbose") { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = config_from_matches(&matches);
    debug!(?config, "parsed configuration");

    let estimate = config.run().context("Failed to run transmission simulation")?;
    println!("{}", estimate);
    Ok(())
}
