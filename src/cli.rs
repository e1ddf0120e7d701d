use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "e2e-ci-guard")]
#[command(
    author,
    version,
    about = "Keep the e2e suites run in CI in sync with the protractor suite map"
)]
#[command(long_about = "Checks that every suite in the protractor config has a CI job flag \
    and a matching --suite script entry, and that CI runs nothing protractor no longer declares.\n\n\
    Runs `check` when no subcommand is given.\n\n\
    Exit codes:\n  \
    0 - Suites are in sync\n  \
    1 - Suites are out of sync\n  \
    2 - Configuration, parse or IO error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify CI and protractor suites match (default)
    Check(CheckArgs),

    /// Print the suites extracted from each source without comparing them
    Suites(SuitesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Where to read suites from; shared by `check` and `suites`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CI definition to read (overrides config `ci.path`)
    #[arg(long)]
    pub ci_file: Option<PathBuf>,

    /// Protractor config to read (overrides config `protractor.path`)
    #[arg(long)]
    pub protractor_file: Option<PathBuf>,

    /// Prefix of the env.jobs suite flags (overrides config `ci.job_prefix`)
    #[arg(long)]
    pub job_prefix: Option<String>,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Suite declared in protractor but not run in CI (can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Fail when an excluded suite is not declared in protractor
    #[arg(long)]
    pub strict: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SuitesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".e2e-ci-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
