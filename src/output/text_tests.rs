use super::*;
use crate::checker::SyncReport;
use crate::error::GuardError;

fn set(names: &[&str]) -> SuiteSet {
    names.iter().map(ToString::to_string).collect()
}

fn sample_sets() -> SuiteSets {
    SuiteSets {
        jobs: set(&["oneword", "twoWords"]),
        scripts: set(&["oneword", "twoWords"]),
        config: set(&["oneword", "twoWords", "fourWord"]),
    }
}

fn sample_report() -> SyncReport {
    SyncReport {
        suites: set(&["oneword", "twoWords"]),
        excluded: vec!["fourWord".to_string()],
        stale_exclusions: vec![],
    }
}

#[test]
fn passing_check_is_silent_by_default() {
    let sets = sample_sets();
    let report = sample_report();
    let outcome = CheckOutcome {
        sets: &sets,
        excluded: &report.excluded,
        result: Ok(&report),
    };

    let output = TextFormatter::new(ColorMode::Never)
        .format_check(&outcome)
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn verbose_passing_check_lists_sets() {
    let sets = sample_sets();
    let report = sample_report();
    let outcome = CheckOutcome {
        sets: &sets,
        excluded: &report.excluded,
        result: Ok(&report),
    };

    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format_check(&outcome)
        .unwrap();
    assert!(output.contains("CI jobs"));
    assert!(output.contains("oneword, twoWords, fourWord"));
    assert!(output.contains("excluded: fourWord"));
    assert!(output.contains("✓ 2 e2e suites in sync"));
}

#[test]
fn verbose_passing_check_reports_stale_exclusions() {
    let sets = sample_sets();
    let mut report = sample_report();
    report.stale_exclusions = vec!["retired".to_string()];
    let excluded = vec!["fourWord".to_string(), "retired".to_string()];
    let outcome = CheckOutcome {
        sets: &sets,
        excluded: &excluded,
        result: Ok(&report),
    };

    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format_check(&outcome)
        .unwrap();
    assert!(output.contains("stale exclusions: retired"));
}

#[test]
fn verbose_failing_check_marks_out_of_sync() {
    let sets = sample_sets();
    let err = GuardError::EmptyScriptSuites;
    let outcome = CheckOutcome {
        sets: &sets,
        excluded: &[],
        result: Err(&err),
    };

    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format_check(&outcome)
        .unwrap();
    assert!(output.contains("✗ e2e suites out of sync"));
    assert!(!output.contains("excluded:"));
}

#[test]
fn suites_listing_has_one_section_per_source() {
    let output = TextFormatter::new(ColorMode::Never)
        .format_suites(&sample_sets())
        .unwrap();
    assert!(output.contains("CI jobs (2):\n  oneword\n  twoWords\n"));
    assert!(output.contains("CI script (2):"));
    assert!(output.contains("protractor config (3):"));
}

#[test]
fn colors_are_applied_when_forced() {
    let output = TextFormatter::new(ColorMode::Always)
        .format_suites(&sample_sets())
        .unwrap();
    assert!(output.contains("\x1b[33mCI jobs\x1b[0m"));
}
