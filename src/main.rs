use std::io::IsTerminal;

use clap::Parser;

use e2e_ci_guard::cli::{CheckArgs, Cli, ColorChoice, Commands};
use e2e_ci_guard::commands::{run_check, run_init, run_suites};
use e2e_ci_guard::logging;

fn main() {
    let cli = Cli::parse();

    let use_ansi = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    };
    logging::init(cli.verbose, cli.quiet, use_ansi);

    let exit_code = match &cli.command {
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Suites(args)) => run_suites(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        None => run_check(&CheckArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}
