use crate::cli::{Cli, SuitesArgs};
use crate::config::{FileSystem, RealFileSystem};
use crate::extract::SourceReader;
use crate::output::{ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, resolve_config, write_output};

#[must_use]
pub fn run_suites(args: &SuitesArgs, cli: &Cli) -> i32 {
    match run_suites_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_guard_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints the suites each source declares, without reconciling them.
///
/// # Errors
/// Returns an error if the configuration or either source cannot be read.
pub fn run_suites_impl(args: &SuitesArgs, cli: &Cli) -> Result<()> {
    let output = format_suites_with_fs(args, cli, &RealFileSystem)?;
    write_output(None, &output, false)
}

pub(crate) fn format_suites_with_fs<F: FileSystem>(
    args: &SuitesArgs,
    cli: &Cli,
    fs: &F,
) -> Result<String> {
    let config = resolve_config(fs, &args.source, cli.no_config)?;
    let sets = SourceReader::with_fs(fs).collect(&config)?;

    match args.format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format_suites(&sets)
        }
        OutputFormat::Json => JsonFormatter.format_suites(&sets),
    }
}

#[cfg(test)]
#[path = "suites_tests.rs"]
mod tests;
