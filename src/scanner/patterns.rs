//! Tag pattern compilation.
//!
//! Turns the three severity configuration strings into a ready-to-match rule
//! set, once, up front. A severity whose pattern fails to compile simply
//! contributes no matchers; the failure is recorded as an error string and
//! never aborts compilation of the other severities.

use regex::{Regex, RegexBuilder};

use super::types::Severity;

/// Whether tag comparison is case sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    CaseSensitive,
    IgnoreCase,
}

/// How the configuration strings are interpreted.
///
/// In string mode each severity holds a comma-separated list of literal
/// tags. In regexp mode each severity holds one full regular expression
/// whose first capture group is the tag and whose second is the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherMode {
    #[default]
    StringMatch,
    RegexpMatch,
}

/// A single literal tag and its compiled word-boundary matcher.
#[derive(Debug, Clone)]
pub(crate) struct TagMatcher {
    /// Canonical tag as configured; emitted verbatim on a match
    pub tag: String,
    pub regex: Regex,
}

/// Compiled matcher(s) for one severity.
#[derive(Debug, Clone)]
pub(crate) enum SeverityMatcher {
    /// String mode: every tag is tried against every line
    Tags(Vec<TagMatcher>),
    /// Regexp mode: the single configured expression
    Pattern(Regex),
}

/// The compiled, ready-to-match form of the three severity configurations.
///
/// Severities whose configuration was empty or invalid are absent from
/// `entries`, so a partially broken configuration still scans with the
/// remaining rules.
#[derive(Debug, Clone, Default)]
pub struct TagRules {
    pub(crate) entries: Vec<(Severity, SeverityMatcher)>,
    errors: Vec<String>,
}

impl TagRules {
    /// Compile the configuration strings for HIGH, NORMAL and LOW.
    ///
    /// In regexp mode the configured expressions must contain two capture
    /// groups (tag, message); this is a caller precondition and is not
    /// validated here. A missing group yields an empty tag or message.
    pub fn compile(
        high: &str,
        normal: &str,
        low: &str,
        case_mode: CaseMode,
        matcher_mode: MatcherMode,
    ) -> Self {
        let mut rules = TagRules::default();

        let configs = [
            (Severity::High, high),
            (Severity::Normal, normal),
            (Severity::Low, low),
        ];
        for (severity, config) in configs {
            match matcher_mode {
                MatcherMode::StringMatch => rules.compile_tags(severity, config, case_mode),
                MatcherMode::RegexpMatch => rules.compile_pattern(severity, config, case_mode),
            }
        }

        rules
    }

    /// True if at least one configured pattern failed to compile.
    pub fn has_invalid_pattern(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Split a comma-separated tag list, trim each entry, drop empties and
    /// build one word-boundary matcher per remaining tag.
    ///
    /// Under IGNORE_CASE the canonical tag is the configured tag in upper
    /// case, so findings carry one spelling no matter how the source writes
    /// it.
    fn compile_tags(&mut self, severity: Severity, config: &str, case_mode: CaseMode) {
        let mut matchers = Vec::new();
        for tag in config.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if let Some(regex) = self.build(&tag_pattern(tag), case_mode) {
                let canonical = match case_mode {
                    CaseMode::CaseSensitive => tag.to_string(),
                    CaseMode::IgnoreCase => tag.to_uppercase(),
                };
                matchers.push(TagMatcher {
                    tag: canonical,
                    regex,
                });
            }
        }
        if !matchers.is_empty() {
            self.entries.push((severity, SeverityMatcher::Tags(matchers)));
        }
    }

    /// Compile one severity's configuration string directly as a regex.
    fn compile_pattern(&mut self, severity: Severity, config: &str, case_mode: CaseMode) {
        let pattern = config.trim();
        if pattern.is_empty() {
            return;
        }
        if let Some(regex) = self.build(pattern, case_mode) {
            self.entries.push((severity, SeverityMatcher::Pattern(regex)));
        }
    }

    fn build(&mut self, pattern: &str, case_mode: CaseMode) -> Option<Regex> {
        match RegexBuilder::new(pattern)
            .case_insensitive(case_mode == CaseMode::IgnoreCase)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(err) => {
                self.errors.push(format!(
                    "Specified pattern is an invalid regular expression: '{pattern}': {err}"
                ));
                None
            }
        }
    }
}

/// Build the word-boundary pattern for a literal tag.
///
/// A boundary anchor is placed only where the tag edge is alphanumeric, so
/// "TODO" never matches inside "TODOLIST" while non-word tags such as "!!!"
/// or "@todo" remain matchable.
fn tag_pattern(tag: &str) -> String {
    let mut pattern = String::new();
    if tag.chars().next().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(tag));
    if tag.chars().last().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern
}
