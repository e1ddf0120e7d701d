//! Suite names from the CI definition.
//!
//! The same suites are read twice: once from the `env.jobs` flags and once
//! from the `--suite="..."` arguments in `script`. Both lists are kept apart so
//! the reconciler can catch a job flag that no longer matches its script line.

use regex::Regex;
use serde_yaml::Value;

use crate::error::{GuardError, Result};
use crate::naming::env_var_to_suite_name;

use super::{SuiteSet, insert_suite};

/// Parses CI definition text into a YAML value.
///
/// # Errors
/// Returns `YamlParse` if the text is not valid YAML.
pub fn parse_ci_definition(content: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(content)?)
}

/// Extracts suite names from a parsed CI definition.
pub struct CiSuiteExtractor {
    job_pattern: Regex,
    suite_pattern: Regex,
}

impl CiSuiteExtractor {
    /// Creates an extractor for job flags starting with `job_prefix`.
    ///
    /// # Errors
    /// Returns a config error if the prefix cannot form a valid pattern.
    pub fn new(job_prefix: &str) -> Result<Self> {
        let job_pattern = Regex::new(&format!(
            r"\b{}([A-Za-z0-9_]+)=",
            regex::escape(job_prefix)
        ))
        .map_err(|e| GuardError::Config(format!("invalid job prefix '{job_prefix}': {e}")))?;

        Ok(Self {
            job_pattern,
            suite_pattern: Regex::new(r#"--suite="([A-Za-z0-9_-]+)""#).expect("Invalid regex"),
        })
    }

    /// Suite names encoded in the `env.jobs` variable names.
    #[must_use]
    pub fn job_suite_names(&self, ci: &Value) -> SuiteSet {
        let mut names = SuiteSet::new();
        for entry in string_entries(ci.get("env").and_then(|env| env.get("jobs")), "env.jobs") {
            let before = names.len();
            for caps in self.job_pattern.captures_iter(entry) {
                let name = env_var_to_suite_name(&caps[1]);
                if name.is_empty() {
                    continue;
                }
                insert_suite(&mut names, name, "env.jobs");
            }
            if names.len() == before {
                tracing::debug!(entry, "env.jobs entry carries no e2e suite flag");
            }
        }
        names
    }

    /// Suite names passed as `--suite="..."` in the `script` section.
    #[must_use]
    pub fn script_suite_names(&self, ci: &Value) -> SuiteSet {
        let mut names = SuiteSet::new();
        for entry in string_entries(ci.get("script"), "script") {
            let mut found = false;
            for caps in self.suite_pattern.captures_iter(entry) {
                found = true;
                insert_suite(&mut names, caps[1].to_string(), "script");
            }
            if !found {
                tracing::debug!(entry, "script entry has no --suite argument");
            }
        }
        names
    }
}

/// String items of a YAML sequence; anything else is skipped.
fn string_entries<'a>(
    section: Option<&'a Value>,
    label: &'static str,
) -> impl Iterator<Item = &'a str> {
    let items: &'a [Value] = match section {
        Some(Value::Sequence(seq)) => seq.as_slice(),
        Some(Value::Null) | None => &[],
        Some(other) => {
            tracing::warn!(section = label, "expected a list, found {}", kind_of(other));
            &[]
        }
    };

    items.iter().filter_map(move |item| {
        let s = item.as_str();
        if s.is_none() {
            tracing::debug!(section = label, "skipping non-string {}", kind_of(item));
        }
        s
    })
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
#[path = "ci_tests.rs"]
mod tests;
