//! Lockstep CLI — the command-line interface for the lockstep equivalence kit.
//!
//! Provides `lockstep compare` for running a scenario's golden-vs-candidate
//! equivalence check and `lockstep trace` for printing the golden model's
//! step-by-step outputs for a scenario's stimulus.

#![warn(missing_docs)]

mod compare;
mod scenario;
mod trace;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Lockstep — cycle-accurate golden-model equivalence testing.
#[derive(Parser, Debug)]
#[command(name = "lockstep", version, about = "Lockstep equivalence testing")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the per-step trace while running.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scenario's equivalence comparison.
    Compare(CompareArgs),
    /// Print the golden model's per-step trace for a scenario's stimulus.
    Trace(TraceArgs),
}

/// Arguments for the `lockstep compare` subcommand.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Path to a `lockstep.toml` scenario file or a directory containing
    /// one. Defaults to the current directory.
    pub scenario: Option<String>,

    /// Output format for the comparison report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `lockstep trace` subcommand.
#[derive(Parser, Debug)]
pub struct TraceArgs {
    /// Path to a `lockstep.toml` scenario file or a directory containing
    /// one. Defaults to the current directory.
    pub scenario: Option<String>,

    /// Maximum number of trace rows to print.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print per-step detail.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Command::Compare(ref args) => compare::run(args, &global),
        Command::Trace(ref args) => trace::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
