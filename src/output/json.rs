use serde::Serialize;

use crate::error::{GuardError, Result, SetMismatch};
use crate::extract::{SuiteSet, SuiteSets};

use super::{CheckOutcome, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonCheckOutput<'a> {
    status: &'static str,
    suites: JsonSuites<'a>,
    excluded: &'a [String],
    stale_exclusions: &'a [String],
    mismatches: &'a [SetMismatch],
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonSuites<'a> {
    jobs: &'a SuiteSet,
    scripts: &'a SuiteSet,
    protractor: &'a SuiteSet,
}

#[derive(Serialize)]
struct JsonError {
    #[serde(rename = "type")]
    error_type: &'static str,
    message: String,
}

impl<'a> From<&'a SuiteSets> for JsonSuites<'a> {
    fn from(sets: &'a SuiteSets) -> Self {
        Self {
            jobs: &sets.jobs,
            scripts: &sets.scripts,
            protractor: &sets.config,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, outcome: &CheckOutcome<'_>) -> Result<String> {
        let output = match outcome.result {
            Ok(report) => JsonCheckOutput {
                status: "in_sync",
                suites: outcome.sets.into(),
                excluded: &report.excluded,
                stale_exclusions: &report.stale_exclusions,
                mismatches: &[],
                error: None,
            },
            Err(err) => JsonCheckOutput {
                status: "out_of_sync",
                suites: outcome.sets.into(),
                excluded: outcome.excluded,
                stale_exclusions: match err {
                    GuardError::StaleExclusions { names } => names.as_slice(),
                    _ => &[],
                },
                mismatches: match err {
                    GuardError::SuiteMismatch { mismatches } => mismatches.as_slice(),
                    _ => &[],
                },
                error: Some(JsonError {
                    error_type: err.error_type(),
                    message: err.to_string(),
                }),
            },
        };

        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }

    fn format_suites(&self, sets: &SuiteSets) -> Result<String> {
        let output = JsonSuites::from(sets);
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
