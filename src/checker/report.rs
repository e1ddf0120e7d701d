use serde::Serialize;

use crate::extract::SuiteSet;

/// Outcome of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// The suites every source agreed on, in protractor declaration order.
    pub suites: SuiteSet,
    /// Exclusions that removed a suite from the protractor set.
    pub excluded: Vec<String>,
    /// Exclusions naming suites the protractor config does not declare.
    pub stale_exclusions: Vec<String>,
}

impl SyncReport {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.stale_exclusions.is_empty()
    }
}
