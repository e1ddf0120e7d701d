use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One pair of suite sets that should be equal but are not.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SetMismatch {
    /// Name of the left-hand source (e.g. "CI jobs").
    pub left: String,
    /// Name of the right-hand source (e.g. "CI script").
    pub right: String,
    /// Suites present on the left but missing on the right.
    pub only_in_left: Vec<String>,
    /// Suites present on the right but missing on the left.
    pub only_in_right: Vec<String>,
}

impl fmt::Display for SetMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.left, self.right)?;
        if !self.only_in_left.is_empty() {
            write!(
                f,
                "; only in {}: {}",
                self.left,
                self.only_in_left.join(", ")
            )?;
        }
        if !self.only_in_right.is_empty() {
            write!(
                f,
                "; only in {}: {}",
                self.right,
                self.only_in_right.join(", ")
            )?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("No suite map literal found in {path}")]
    SuiteMapNotFound { path: PathBuf },

    #[error("The e2e test suites extracted from the jobs section of the CI definition are empty")]
    EmptyJobSuites,

    #[error(
        "The e2e test suites extracted from the script section of the CI definition are empty"
    )]
    EmptyScriptSuites,

    #[error("The e2e test suites extracted from the protractor config are empty")]
    EmptyConfigSuites,

    #[error("Protractor test suites and CI test suites are not in sync")]
    SuiteMismatch { mismatches: Vec<SetMismatch> },

    #[error("Excluded suites are not declared in the protractor config: {}", .names.join(", "))]
    StaleExclusions { names: Vec<String> },
}

impl GuardError {
    /// Short category label used by the error renderer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::YamlParse(_) => "CiParse",
            Self::JsonSerialize(_) => "Output",
            Self::SuiteMapNotFound { .. } => "ProtractorParse",
            Self::EmptyJobSuites | Self::EmptyScriptSuites | Self::EmptyConfigSuites => {
                "EmptySuites"
            }
            Self::SuiteMismatch { .. } => "SuiteMismatch",
            Self::StaleExclusions { .. } => "StaleExclusions",
        }
    }

    /// The human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::SuiteMapNotFound { path } => {
                path.display().to_string()
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::YamlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::EmptyJobSuites
            | Self::EmptyScriptSuites
            | Self::EmptyConfigSuites
            | Self::SuiteMismatch { .. }
            | Self::StaleExclusions { .. } => self.to_string(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::SuiteMapNotFound { .. } => {
                Some("expected an object literal assigned as `suites = { ... }`".to_string())
            }
            Self::SuiteMismatch { mismatches } => Some(
                mismatches
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n    "),
            ),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check the path, or set it with --ci-file / --protractor-file".to_string())
            }
            Self::EmptyJobSuites => Some(
                "Add `RUN_E2E_TESTS_<SUITE>=true` entries to env.jobs, or check --job-prefix"
                    .to_string(),
            ),
            Self::EmptyScriptSuites => {
                Some("Add `--suite=\"<name>\"` invocations to the script section".to_string())
            }
            Self::EmptyConfigSuites => Some(
                "Declare suites in protractor.conf.js, or shrink the excluded_suites list"
                    .to_string(),
            ),
            Self::SuiteMismatch { .. } => Some(
                "Every protractor suite needs a CI job flag and a matching --suite script entry"
                    .to_string(),
            ),
            Self::StaleExclusions { .. } => {
                Some("Remove the names from check.excluded_suites".to_string())
            }
            _ => None,
        }
    }

    /// True for failures that mean the suites are out of sync, as opposed to
    /// configuration, parse, or IO errors.
    #[must_use]
    pub const fn is_sync_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyJobSuites
                | Self::EmptyScriptSuites
                | Self::EmptyConfigSuites
                | Self::SuiteMismatch { .. }
                | Self::StaleExclusions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
