//! Command-line interface (CLI) argument parsing module.
//!
//! The probe has no tunable behavior at runtime; the only flags control how
//! much diagnostic logging is written to stderr.

use clap::Parser;

/// CLI argument parser using clap derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "dnsprobe",
    version,
    about = "Periodically measure DNS resolution latency",
    long_about = "Resolves a fixed list of hostnames every 10 seconds and prints a \
                  cumulative latency report every 30 seconds. Stop with Ctrl-C."
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
