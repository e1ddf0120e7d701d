use crate::checker::{CI, Reconciler};
use crate::cli::{CheckArgs, Cli};
use crate::config::{FileSystem, RealFileSystem};
use crate::extract::SourceReader;
use crate::naming::suite_name_to_env_var;
use crate::output::{
    CheckOutcome, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_OUT_OF_SYNC, EXIT_SUCCESS, GuardError, Result};

use super::context::{color_choice_to_mode, merge_exclusions, resolve_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_guard_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs `check` against the real filesystem.
///
/// # Errors
/// Returns an error when configuration, either source file or the output
/// cannot be processed. Suites being out of sync is not an error here; it is
/// reported through the returned exit code.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    run_check_with_fs(args, cli, &RealFileSystem)
}

pub(crate) fn run_check_with_fs<F: FileSystem>(
    args: &CheckArgs,
    cli: &Cli,
    fs: &F,
) -> Result<i32> {
    let mode = color_choice_to_mode(cli.color);
    let error_output = ErrorOutput::new(mode);

    if cli.no_config && args.source.config.is_some() {
        error_output.print_warning(
            "--config is ignored because --no-config is set",
            Some("Drop one of the two flags"),
        );
    }

    // 1. Effective configuration
    let mut config = resolve_config(fs, &args.source, cli.no_config)?;
    merge_exclusions(&mut config, &args.exclude)?;
    let excluded = config.check.excluded_suites.clone();
    let strict = args.strict || config.check.strict;

    // 2. Extract the three suite sets
    let sets = SourceReader::with_fs(fs).collect(&config)?;

    // 3. Reconcile
    let result = Reconciler::new(excluded.clone())
        .with_strict(strict)
        .reconcile(&sets);

    // 4. Render
    let outcome = CheckOutcome {
        sets: &sets,
        excluded: &excluded,
        result: result.as_ref(),
    };
    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(mode, cli.verbose).format_check(&outcome)?
        }
        OutputFormat::Json => JsonFormatter.format_check(&outcome)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    match result {
        Ok(_) => Ok(EXIT_SUCCESS),
        Err(err) if err.is_sync_failure() => {
            if args.format == OutputFormat::Text {
                error_output.print_guard_error(&err);
            }
            log_missing_job_flags(&err, &config.ci.job_prefix);
            Ok(EXIT_OUT_OF_SYNC)
        }
        Err(err) => Err(err),
    }
}

/// Names the env.jobs flag each protractor-only suite would need.
fn log_missing_job_flags(err: &GuardError, prefix: &str) {
    let GuardError::SuiteMismatch { mismatches } = err else {
        return;
    };
    for mismatch in mismatches.iter().filter(|m| m.left == CI) {
        for name in &mismatch.only_in_right {
            let flag = format!("{prefix}{}=true", suite_name_to_env_var(name));
            tracing::info!(suite = %name, %flag, "protractor suite is not run in CI");
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
