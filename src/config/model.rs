use std::path::PathBuf;

use serde::Deserialize;

/// Default CI definition path, relative to the project root.
pub const DEFAULT_CI_PATH: &str = ".travis.yml";

/// Default protractor config path, relative to the project root.
pub const DEFAULT_PROTRACTOR_PATH: &str = "core/tests/protractor.conf.js";

/// Prefix of the env.jobs flags that switch an e2e suite on.
pub const DEFAULT_JOB_PREFIX: &str = "RUN_E2E_TESTS_";

/// Top-level configuration loaded from `.e2e-ci-guard.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ci: CiConfig,

    #[serde(default)]
    pub protractor: ProtractorConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// Where the CI definition lives and how its job flags are spelled [ci].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CiConfig {
    /// Path to the CI pipeline definition.
    #[serde(default = "default_ci_path")]
    pub path: PathBuf,

    /// Variable-name prefix stripped from env.jobs entries.
    #[serde(default = "default_job_prefix")]
    pub job_prefix: String,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            path: default_ci_path(),
            job_prefix: default_job_prefix(),
        }
    }
}

/// Location of the protractor config [protractor].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProtractorConfig {
    #[serde(default = "default_protractor_path")]
    pub path: PathBuf,
}

impl Default for ProtractorConfig {
    fn default() -> Self {
        Self {
            path: default_protractor_path(),
        }
    }
}

/// Reconciliation settings [check].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Suites declared in protractor but intentionally not run in CI.
    #[serde(default)]
    pub excluded_suites: Vec<String>,

    /// Treat stale exclusions (not present in protractor) as failures.
    #[serde(default)]
    pub strict: bool,
}

fn default_ci_path() -> PathBuf {
    PathBuf::from(DEFAULT_CI_PATH)
}

fn default_protractor_path() -> PathBuf {
    PathBuf::from(DEFAULT_PROTRACTOR_PATH)
}

fn default_job_prefix() -> String {
    DEFAULT_JOB_PREFIX.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
