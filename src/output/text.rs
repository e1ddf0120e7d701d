use std::fmt::Write;

use crate::error::Result;
use crate::extract::{SuiteSet, SuiteSets};

use super::{CheckOutcome, ColorMode, OutputFormatter, ansi, is_no_color_set};

/// Plain-text output.
///
/// A passing check prints nothing unless `verbose` is set. Failures are
/// rendered on stderr by [`super::ErrorOutput`], so verbose mode only adds the
/// per-source listing that explains them.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        };
        Self {
            use_colors,
            verbose,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_set(&self, out: &mut String, label: &str, set: &SuiteSet) {
        let count = self.colorize(&set.len().to_string(), ansi::CYAN);
        let names: Vec<&str> = set.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  {label:<18} {count:>3}  {}", names.join(", "));
    }

    fn write_sets(&self, out: &mut String, sets: &SuiteSets) {
        self.write_set(out, "CI jobs", &sets.jobs);
        self.write_set(out, "CI script", &sets.scripts);
        self.write_set(out, "protractor config", &sets.config);
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_check(&self, outcome: &CheckOutcome<'_>) -> Result<String> {
        let mut out = String::new();
        if self.verbose == 0 {
            return Ok(out);
        }

        self.write_sets(&mut out, outcome.sets);
        if !outcome.excluded.is_empty() {
            let _ = writeln!(out, "  excluded: {}", outcome.excluded.join(", "));
        }

        match outcome.result {
            Ok(report) => {
                let icon = self.colorize("✓", ansi::GREEN);
                if report.has_warnings() {
                    let stale = self.colorize(&report.stale_exclusions.join(", "), ansi::YELLOW);
                    let _ = writeln!(out, "  stale exclusions: {stale}");
                }
                let _ = writeln!(out, "{icon} {} e2e suites in sync", report.suites.len());
            }
            Err(_) => {
                let icon = self.colorize("✗", ansi::RED);
                let _ = writeln!(out, "{icon} e2e suites out of sync");
            }
        }
        Ok(out)
    }

    fn format_suites(&self, sets: &SuiteSets) -> Result<String> {
        let mut out = String::new();
        for (label, set) in [
            ("CI jobs", &sets.jobs),
            ("CI script", &sets.scripts),
            ("protractor config", &sets.config),
        ] {
            let header = self.colorize(label, ansi::YELLOW);
            let _ = writeln!(out, "{header} ({}):", set.len());
            for name in set {
                let _ = writeln!(out, "  {name}");
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
