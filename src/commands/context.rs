//! Shared plumbing for the subcommands: config resolution, CLI overrides and
//! output writing.

use std::fs;
use std::path::Path;

use crate::cli::{ColorChoice, SourceArgs};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, FileSystem, validate_config_semantics,
};
use crate::output::ColorMode;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration through `fs`.
///
/// With `no_config` set the file is never read and defaults are returned.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or
/// validated.
pub(crate) fn load_config<F: FileSystem>(
    fs: F,
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::with_fs(fs);
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Apply `--ci-file`, `--protractor-file` and `--job-prefix` on top of the
/// loaded configuration, then re-validate.
///
/// # Errors
/// Returns an error if the overridden job prefix is invalid.
pub(crate) fn apply_source_overrides(
    config: &mut Config,
    source: &SourceArgs,
) -> crate::Result<()> {
    if let Some(path) = &source.ci_file {
        config.ci.path.clone_from(path);
    }
    if let Some(path) = &source.protractor_file {
        config.protractor.path.clone_from(path);
    }
    if let Some(prefix) = &source.job_prefix {
        config.ci.job_prefix.clone_from(prefix);
    }
    validate_config_semantics(config)
}

/// Effective configuration for a command reading both sources.
///
/// # Errors
/// Returns an error if loading fails or the overrides are invalid.
pub(crate) fn resolve_config<F: FileSystem>(
    fs: F,
    source: &SourceArgs,
    no_config: bool,
) -> crate::Result<Config> {
    let mut config = load_config(fs, source.config.as_deref(), no_config)?;
    apply_source_overrides(&mut config, source)?;
    tracing::debug!(
        ci = %config.ci.path.display(),
        protractor = %config.protractor.path.display(),
        prefix = %config.ci.job_prefix,
        "effective configuration"
    );
    Ok(config)
}

/// Appends CLI exclusions to the configured ones, skipping names already
/// listed, and validates the merged list.
///
/// # Errors
/// Returns an error if a CLI exclusion is blank.
pub(crate) fn merge_exclusions(config: &mut Config, cli: &[String]) -> crate::Result<()> {
    for name in cli {
        if !config.check.excluded_suites.contains(name) {
            config.check.excluded_suites.push(name.clone());
        }
    }
    validate_config_semantics(config)
}

/// Write output to a file or stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
