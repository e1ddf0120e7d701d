//! Reading both sources and turning them into suite-name sets.

mod ci;
mod protractor;

use std::path::Path;

use indexmap::IndexSet;
use serde::Serialize;

pub use ci::{CiSuiteExtractor, parse_ci_definition};
pub use protractor::ProtractorSuiteExtractor;

use crate::config::{Config, FileSystem, RealFileSystem};
use crate::error::{GuardError, Result};

/// Suite names in first-seen order. Equality ignores order.
pub type SuiteSet = IndexSet<String>;

/// The three independently extracted suite sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuiteSets {
    /// Decoded from the `env.jobs` flags of the CI definition.
    pub jobs: SuiteSet,
    /// Read from the `--suite` arguments in the CI `script` section.
    pub scripts: SuiteSet,
    /// Keys of the protractor suite map.
    pub config: SuiteSet,
}

fn insert_suite(set: &mut SuiteSet, name: String, source: &'static str) {
    if !set.insert(name.clone()) {
        tracing::warn!(suite = %name, source, "suite listed more than once");
    }
}

/// Reads the CI definition and protractor config through a [`FileSystem`].
#[derive(Debug)]
pub struct SourceReader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for SourceReader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> SourceReader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| GuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads and parses the CI definition.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read and `YamlParse` if it is
    /// not valid YAML.
    pub fn read_ci_definition(&self, path: &Path) -> Result<serde_yaml::Value> {
        let content = self.read(path)?;
        parse_ci_definition(&content)
    }

    /// Reads the protractor config source text.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn read_protractor_conf(&self, path: &Path) -> Result<String> {
        self.read(path)
    }

    /// Extracts all three suite sets using the paths and prefix in `config`.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or parsed, or if the
    /// protractor config has no suite map.
    pub fn collect(&self, config: &Config) -> Result<SuiteSets> {
        let ci = self.read_ci_definition(&config.ci.path)?;
        let extractor = CiSuiteExtractor::new(&config.ci.job_prefix)?;
        let jobs = extractor.job_suite_names(&ci);
        let scripts = extractor.script_suite_names(&ci);

        let protractor_path = &config.protractor.path;
        let source = self.read_protractor_conf(protractor_path)?;
        let suites = ProtractorSuiteExtractor::new()
            .suite_names(&source)
            .ok_or_else(|| GuardError::SuiteMapNotFound {
                path: protractor_path.clone(),
            })?;

        tracing::info!(
            jobs = jobs.len(),
            scripts = scripts.len(),
            protractor = suites.len(),
            "extracted e2e suites"
        );

        Ok(SuiteSets {
            jobs,
            scripts,
            config: suites,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
