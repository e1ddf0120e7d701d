//! Conversion between CI environment-variable suffixes and suite names.
//!
//! CI job flags spell suites in `UPPER_SNAKE_CASE` (`RUN_E2E_TESTS_TWO_WORDS`),
//! while the protractor suite map uses camelCase (`twoWords`).

/// Converts an upper-snake-case variable suffix into a camelCase suite name.
///
/// The input is lowercased and split on `_`. The first segment is kept as-is.
/// Following segments are title-cased: every letter that starts a run of
/// letters is capitalized, so a digit inside a segment also starts a new word.
/// Empty segments from doubled, leading or trailing underscores are dropped.
///
/// - `ONEWORD` → `oneword`
/// - `TWO_WORDS` → `twoWords`
/// - `THREE_WORD_NAME` → `threeWordName`
/// - `PAGE_2FA_FLOW` → `page2FaFlow`
#[must_use]
pub fn env_var_to_suite_name(suffix: &str) -> String {
    let lower = suffix.to_lowercase();
    let mut segments = lower.split('_').filter(|s| !s.is_empty());

    let mut name = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut prev_alphabetic = false;
        for c in segment.chars() {
            if c.is_alphabetic() && !prev_alphabetic {
                name.extend(c.to_uppercase());
            } else {
                name.push(c);
            }
            prev_alphabetic = c.is_alphabetic();
        }
    }
    name
}

/// Converts a camelCase suite name back into its upper-snake-case suffix.
///
/// A word boundary is placed before an uppercase letter that follows a
/// lowercase letter or digit, and before a digit that follows a letter.
///
/// - `oneword` → `ONEWORD`
/// - `twoWords` → `TWO_WORDS`
#[must_use]
pub fn suite_name_to_env_var(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if let Some(p) = prev {
            let upper_boundary = c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit());
            let digit_boundary = c.is_ascii_digit() && p.is_alphabetic();
            if (upper_boundary || digit_boundary) && p != '_' {
                out.push('_');
            }
        }
        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_uppercase());
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
