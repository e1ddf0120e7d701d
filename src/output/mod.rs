mod error_output;
mod json;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::checker::SyncReport;
use crate::error::{GuardError, Result};
use crate::extract::SuiteSets;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Everything a formatter needs to describe one check run.
#[derive(Debug, Clone, Copy)]
pub struct CheckOutcome<'a> {
    /// The sets as extracted, before exclusions.
    pub sets: &'a SuiteSets,
    /// The configured exclusion list.
    pub excluded: &'a [String],
    /// Reconciliation result.
    pub result: std::result::Result<&'a SyncReport, &'a GuardError>,
}

/// Trait for formatting check output into various formats.
pub trait OutputFormatter {
    /// Format the outcome of a `check` run.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_check(&self, outcome: &CheckOutcome<'_>) -> Result<String>;

    /// Format the extracted suite sets for the `suites` command.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_suites(&self, sets: &SuiteSets) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
