//! Configuration semantic validation.
//!
//! Checks values that parse fine as TOML but cannot drive a meaningful check.

use indexmap::IndexSet;

use crate::config::Config;
use crate::{GuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the job prefix is empty or not upper-snake-case, or if
/// an excluded suite name is blank or listed twice.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_job_prefix(&config.ci.job_prefix)?;
    validate_excluded_suites(&config.check.excluded_suites)?;
    Ok(())
}

fn validate_job_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(GuardError::Config(
            "ci.job_prefix must not be empty".to_string(),
        ));
    }

    if let Some(c) = prefix
        .chars()
        .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(GuardError::Config(format!(
            "ci.job_prefix '{prefix}' contains '{c}'; only A-Z, 0-9 and '_' are allowed"
        )));
    }
    Ok(())
}

fn validate_excluded_suites(names: &[String]) -> Result<()> {
    let mut seen = IndexSet::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(GuardError::Config(format!(
                "check.excluded_suites[{i}] must not be empty"
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(GuardError::Config(format!(
                "check.excluded_suites lists '{name}' more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
