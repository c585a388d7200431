//! Command-line front end: reads an instance, prints the best coloring found.
//!
//! ```text
//! chromaforge data/gc_50_3 --time-limit 60
//! ```
//!
//! The solution goes to stdout, logs and diagnostics to stderr. A
//! `solver.toml` in the working directory is picked up when present.

use std::path::PathBuf;
use std::process::ExitCode;

use chromaforge::io::{format_solution, parse_instance, read_instance};
use chromaforge::{CliError, ColoringSolver, SolverConfig};
use clap::Parser;

const DEFAULT_CONFIG_FILE: &str = "solver.toml";

#[derive(Debug, Parser)]
#[command(name = "chromaforge", version, about = "Minimum graph coloring by branch-and-bound")]
struct Args {
    /// Instance file (`<n> <m>` then `m` edge lines). Reads stdin when omitted or `-`.
    instance: Option<PathBuf>,

    /// Wall-clock budget in seconds; overrides the configuration file.
    #[arg(short, long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Stop after this many search decisions.
    #[arg(long, value_name = "N")]
    decision_limit: Option<u64>,

    /// Configuration file (TOML, or YAML with a .yml/.yaml extension).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only print the solution.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log progress (-v) or every decision (-vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_console(&args);

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let mut config = load_config(args)?;
    if let Some(secs) = args.time_limit {
        config = config.with_termination_seconds(secs);
    }
    if let Some(limit) = args.decision_limit {
        config = config.with_decision_limit(limit);
    }

    let graph = match &args.instance {
        Some(path) if path.as_os_str() != "-" => read_instance(path)?,
        _ => parse_instance(&read_stdin()?)?,
    };

    let result = ColoringSolver::new().with_config(config).solve(&graph)?;
    Ok(format_solution(&result))
}

fn load_config(args: &Args) -> Result<SolverConfig, CliError> {
    let Some(path) = &args.config else {
        return match SolverConfig::load(DEFAULT_CONFIG_FILE) {
            Ok(config) => Ok(config),
            Err(chromaforge::ConfigError::Io(_)) => Ok(SolverConfig::default()),
            Err(e) => Err(e.into()),
        };
    };

    let yaml = path
        .extension()
        .is_some_and(|ext| ext == "yml" || ext == "yaml");
    let config = if yaml {
        SolverConfig::from_yaml_file(path)?
    } else {
        SolverConfig::from_toml_file(path)?
    };
    Ok(config)
}

fn read_stdin() -> Result<String, CliError> {
    use std::io::Read;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| chromaforge::ChromaForgeError::InvalidInput(format!("cannot read stdin: {}", e)))?;
    Ok(text)
}

#[cfg(feature = "console")]
fn init_console(args: &Args) {
    use tracing::level_filters::LevelFilter;

    if args.quiet {
        return;
    }
    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    chromaforge::console::init_with_level(level);
}

#[cfg(not(feature = "console"))]
fn init_console(_args: &Args) {}
