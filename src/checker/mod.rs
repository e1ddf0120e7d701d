//! Reconciliation of the CI and protractor suite sets.

mod report;

pub use report::SyncReport;

use crate::error::{GuardError, Result, SetMismatch};
use crate::extract::{SuiteSet, SuiteSets};

pub const CI_JOBS: &str = "CI jobs";
pub const CI_SCRIPT: &str = "CI script";
pub const CI: &str = "CI";
pub const PROTRACTOR_CONFIG: &str = "protractor config";

/// Compares the extracted suite sets and fails on any divergence.
///
/// Suites on the exclusion list are removed from the protractor set before
/// comparing, since they are declared there but deliberately not run in CI.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    excluded: Vec<String>,
    strict: bool,
}

impl Reconciler {
    #[must_use]
    pub const fn new(excluded: Vec<String>) -> Self {
        Self {
            excluded,
            strict: false,
        }
    }

    /// Fail when an exclusion names a suite protractor does not declare.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reconciles the three suite sets.
    ///
    /// Checks run in a fixed order: empty jobs, empty script, empty protractor
    /// set (after exclusions), set equality, then stale exclusions in strict
    /// mode. The first failing check decides the error.
    ///
    /// # Errors
    /// Returns `EmptyJobSuites`, `EmptyScriptSuites`, `EmptyConfigSuites`,
    /// `SuiteMismatch` or `StaleExclusions`.
    pub fn reconcile(&self, sets: &SuiteSets) -> Result<SyncReport> {
        let (config, excluded, stale) = self.apply_exclusions(&sets.config);

        for name in &stale {
            tracing::warn!(suite = %name, "excluded suite is not declared in the protractor config");
        }

        if sets.jobs.is_empty() {
            return Err(GuardError::EmptyJobSuites);
        }
        if sets.scripts.is_empty() {
            return Err(GuardError::EmptyScriptSuites);
        }
        if config.is_empty() {
            return Err(GuardError::EmptyConfigSuites);
        }

        let ci: SuiteSet = sets.jobs.union(&sets.scripts).cloned().collect();
        let mismatches: Vec<SetMismatch> = [
            compare(CI_JOBS, &sets.jobs, CI_SCRIPT, &sets.scripts),
            compare(CI, &ci, PROTRACTOR_CONFIG, &config),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !mismatches.is_empty() {
            return Err(GuardError::SuiteMismatch { mismatches });
        }

        if self.strict && !stale.is_empty() {
            return Err(GuardError::StaleExclusions { names: stale });
        }

        tracing::info!(suites = config.len(), "e2e suites are in sync");
        Ok(SyncReport {
            suites: config,
            excluded,
            stale_exclusions: stale,
        })
    }

    /// Returns the filtered set, the exclusions that matched, and the stale ones.
    fn apply_exclusions(&self, config: &SuiteSet) -> (SuiteSet, Vec<String>, Vec<String>) {
        let (excluded, stale): (Vec<String>, Vec<String>) = self
            .excluded
            .iter()
            .cloned()
            .partition(|name| config.contains(name));

        let filtered = config
            .iter()
            .filter(|name| !excluded.contains(name))
            .cloned()
            .collect();

        (filtered, excluded, stale)
    }
}

/// Returns the difference between two sets, or `None` if they are equal.
fn compare(
    left_label: &str,
    left: &SuiteSet,
    right_label: &str,
    right: &SuiteSet,
) -> Option<SetMismatch> {
    if left == right {
        return None;
    }
    Some(SetMismatch {
        left: left_label.to_string(),
        right: right_label.to_string(),
        only_in_left: left.difference(right).cloned().collect(),
        only_in_right: right.difference(left).cloned().collect(),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
