//! Core result types for the task scanner.

use serde::Serialize;

/// Priority bucket assigned to a tag by configuration.
///
/// Ordering matters for grouping and summaries only; during a scan the
/// severities are always evaluated in the fixed order HIGH, NORMAL, LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Normal,
    Low,
}

impl Severity {
    /// Evaluation order of the severities within a single line.
    pub const PRIORITY_ORDER: [Severity; 3] = [Severity::High, Severity::Normal, Severity::Low];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Normal => write!(f, "NORMAL"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

/// One detected tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Severity of the rule that matched
    pub severity: Severity,

    /// The tag text: the canonical configured tag in string mode, the first
    /// capture group in regexp mode
    pub tag: String,

    /// Line number (1-based)
    pub line: usize,

    /// Trailing message after the tag, trimmed; may be empty
    pub message: String,
}

/// Result of scanning one text stream.
///
/// Both sequences are created fresh per scan; only the compiled rule set is
/// reused across streams. Pattern-compilation failures travel here as
/// strings, never as hard errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Findings in the order lines were scanned
    pub tasks: Vec<Task>,

    /// Human-readable pattern compilation errors
    pub errors: Vec<String>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of findings with the given severity.
    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.tasks.iter().filter(|t| t.severity == severity).count()
    }
}
