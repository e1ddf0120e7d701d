//! Suite names from the protractor config.
//!
//! The config is JavaScript, so it is not parsed in full. The extractor finds
//! the `suites = { ... }` (or `suites: { ... }`) object literal and collects
//! its top-level keys, skipping strings and comments and balancing brackets
//! inside the values.

use std::ops::Range;

use regex::Regex;

use super::{SuiteSet, insert_suite};

/// Extracts the suite map keys from protractor config source text.
pub struct ProtractorSuiteExtractor {
    map_start: Regex,
}

impl Default for ProtractorSuiteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtractorSuiteExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map_start: Regex::new(r"\bsuites\s*[=:]\s*\{").expect("Invalid regex"),
        }
    }

    /// Returns the suite names, or `None` if the source has no closed suite
    /// map literal.
    #[must_use]
    pub fn suite_names(&self, source: &str) -> Option<SuiteSet> {
        let skipped = comment_and_string_spans(source);
        let start = self
            .map_start
            .find_iter(source)
            .find(|m| !skipped.iter().any(|span| span.contains(&m.start())))?;
        let body: Vec<char> = source[start.end()..].chars().collect();
        let keys = ObjectScanner::new(&body).top_level_keys()?;

        let mut names = SuiteSet::new();
        for key in keys {
            insert_suite(&mut names, key, "protractor suites");
        }
        Some(names)
    }
}

/// Byte ranges of the comments and string literals in `source`.
fn comment_and_string_spans(source: &str) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(bytes.len());
            }
            _ => {
                i += 1;
                continue;
            }
        }
        spans.push(start..i);
    }
    spans
}

/// Walks an object literal body that starts right after its opening `{`.
struct ObjectScanner<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> ObjectScanner<'a> {
    const fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Collects keys at nesting depth zero. Returns `None` if the closing
    /// brace is never reached.
    fn top_level_keys(mut self) -> Option<Vec<String>> {
        let mut keys = Vec::new();
        let mut depth = 0usize;
        let mut expect_key = true;
        let mut pending: Option<String> = None;

        while let Some(c) = self.peek() {
            match c {
                '/' if self.peek_next() == Some('/') => self.skip_line_comment(),
                '/' if self.peek_next() == Some('*') => self.skip_block_comment(),
                '\'' | '"' | '`' => {
                    let text = self.read_string(c);
                    pending = (depth == 0 && expect_key).then_some(text);
                    expect_key = false;
                }
                c if is_ident_start(c) => {
                    let ident = self.read_ident();
                    pending = (depth == 0 && expect_key).then_some(ident);
                    expect_key = false;
                }
                '[' | '{' | '(' => {
                    depth += 1;
                    pending = None;
                    expect_key = false;
                    self.pos += 1;
                }
                '}' if depth == 0 => return Some(keys),
                ']' | '}' | ')' => {
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                }
                ',' if depth == 0 => {
                    expect_key = true;
                    pending = None;
                    self.pos += 1;
                }
                ':' if depth == 0 => {
                    keys.extend(pending.take());
                    self.pos += 1;
                }
                c if c.is_whitespace() => self.pos += 1,
                _ => {
                    if depth == 0 {
                        pending = None;
                        expect_key = false;
                    }
                    self.pos += 1;
                }
            }
        }
        None
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_next() == Some('/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn read_string(&mut self, quote: char) -> String {
        let mut text = String::new();
        self.pos += 1;
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '\\' => {
                    if let Some(escaped) = self.peek() {
                        text.push(escaped);
                        self.pos += 1;
                    }
                }
                c if c == quote => break,
                c => text.push(c),
            }
        }
        text
    }

    fn read_ident(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            ident.push(c);
            self.pos += 1;
        }
        ident
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
#[path = "protractor_tests.rs"]
mod tests;
