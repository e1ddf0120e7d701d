use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GuardError, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_guard_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template to `args.output`.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# e2e-ci-guard configuration file

[ci]
# CI pipeline definition holding env.jobs and script
path = ".travis.yml"

# Prefix of the env.jobs flags that enable a suite, e.g. RUN_E2E_TESTS_TWO_WORDS=true
job_prefix = "RUN_E2E_TESTS_"

[protractor]
# Protractor config declaring the `suites` map
path = "core/tests/protractor.conf.js"

[check]
# Suites declared in protractor that CI deliberately does not run
excluded_suites = []

# Fail when an excluded suite is no longer declared in protractor
strict = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
