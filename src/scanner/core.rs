//! Line-by-line task scanning.
//!
//! A [`TaskScanner`] holds one compiled rule set and applies it to any
//! number of text streams. Each scan is a single linear pass; no state is
//! kept between lines except the line counter, so a scanner can be shared
//! read-only across threads.

use std::io::{BufRead, BufReader, Read};

use anyhow::{Context, Result};

use super::patterns::{CaseMode, MatcherMode, SeverityMatcher, TagRules};
use super::types::{Report, Task};

/// Scans text streams for configured task tags.
pub struct TaskScanner {
    rules: TagRules,
}

impl TaskScanner {
    pub fn new(rules: TagRules) -> Self {
        Self { rules }
    }

    /// Scan a decoded text stream and collect all findings.
    ///
    /// The stream is consumed fully, line by line; `\n`, `\r\n` and a
    /// missing final newline are all accepted. Decoding the stream is the
    /// caller's concern, as are I/O failures: a read error propagates, a
    /// line without matches is simply skipped.
    pub fn scan<R: Read>(&self, reader: R) -> Result<Report> {
        let mut report = self.fresh_report();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.context("Failed to read line from input stream")?;
            self.scan_line(&line, index + 1, &mut report.tasks);
        }
        Ok(report)
    }

    /// Scan in-memory text. Infallible variant of [`TaskScanner::scan`] for
    /// content that has already been read and decoded.
    pub fn scan_str(&self, text: &str) -> Report {
        let mut report = self.fresh_report();
        for (index, line) in text.lines().enumerate() {
            self.scan_line(line, index + 1, &mut report.tasks);
        }
        report
    }

    /// True if at least one configured pattern failed to compile.
    pub fn has_invalid_pattern(&self) -> bool {
        self.rules.has_invalid_pattern()
    }

    /// All pattern compilation errors, one per line.
    pub fn errors(&self) -> String {
        self.rules.errors().join("\n")
    }

    /// Every scan starts from the compiler's error list; findings are
    /// appended as lines match.
    fn fresh_report(&self) -> Report {
        Report {
            tasks: Vec::new(),
            errors: self.rules.errors().to_vec(),
        }
    }

    /// Evaluate one line against all severities in priority order.
    ///
    /// String mode checks every configured tag of every severity, so one
    /// line can yield several findings. Regexp mode produces at most one
    /// finding per severity.
    fn scan_line(&self, line: &str, line_number: usize, tasks: &mut Vec<Task>) {
        for (severity, matcher) in &self.rules.entries {
            match matcher {
                SeverityMatcher::Tags(tags) => {
                    for tag in tags {
                        if let Some(found) = tag.regex.find(line) {
                            tasks.push(Task {
                                severity: *severity,
                                tag: tag.tag.clone(),
                                line: line_number,
                                message: extract_message(&line[found.end()..]),
                            });
                        }
                    }
                }
                SeverityMatcher::Pattern(regex) => {
                    if let Some(caps) = regex.captures(line) {
                        let tag = caps.get(1).map_or("", |m| m.as_str());
                        let message = caps.get(2).map_or("", |m| m.as_str());
                        tasks.push(Task {
                            severity: *severity,
                            tag: tag.to_string(),
                            line: line_number,
                            message: extract_message(message),
                        });
                    }
                }
            }
        }
    }
}

/// Builds a [`TaskScanner`] from the three severity configuration strings.
///
/// Unset severities default to empty and contribute no rule. In regexp mode
/// each configured expression needs two capture groups (tag, message); see
/// [`TagRules::compile`].
#[derive(Debug, Clone, Default)]
pub struct TaskScannerBuilder {
    high: String,
    normal: String,
    low: String,
    case_mode: CaseMode,
    matcher_mode: MatcherMode,
}

impl TaskScannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag list (or regex) for HIGH severity.
    pub fn high(mut self, config: &str) -> Self {
        self.high = config.to_string();
        self
    }

    /// Tag list (or regex) for NORMAL severity.
    pub fn normal(mut self, config: &str) -> Self {
        self.normal = config.to_string();
        self
    }

    /// Tag list (or regex) for LOW severity.
    pub fn low(mut self, config: &str) -> Self {
        self.low = config.to_string();
        self
    }

    pub fn case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    pub fn matcher_mode(mut self, matcher_mode: MatcherMode) -> Self {
        self.matcher_mode = matcher_mode;
        self
    }

    pub fn build(self) -> TaskScanner {
        TaskScanner::new(TagRules::compile(
            &self.high,
            &self.normal,
            &self.low,
            self.case_mode,
            self.matcher_mode,
        ))
    }
}

/// Strip the separator between tag and message: leading colons, dashes and
/// whitespace, then trailing whitespace.
fn extract_message(text: &str) -> String {
    text.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .trim_end()
        .to_string()
}
