//! # Tasklint - Fast Task-Tag Scanning for Source Trees
//!
//! Tasklint finds open-task markers (FIXME, TODO and friends) in text
//! streams and source trees and buckets them into HIGH/NORMAL/LOW
//! severities.
//!
//! ## Features
//!
//! - **Word-boundary matching**: "TODO" never matches inside "TODOLIST"
//! - **Three severities**: independent tag lists for HIGH, NORMAL and LOW
//! - **Regexp mode**: bring your own expression with tag/message captures
//! - **Graceful degradation**: a broken pattern disables one severity, not
//!   the scan
//! - **Fast**: parallel directory scans over an immutable rule set
//!
//! ## Quick Start
//!
//! ```bash
//! # Install tasklint
//! cargo install tasklint
//!
//! # Scan the current directory with the default tags
//! tasklint scan
//!
//! # Custom tags, case-insensitive
//! tasklint scan --high "FIXME,XXX" --normal TODO --ignore-case
//! ```

pub mod cli;
pub mod config;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::TasklintConfig;
pub use scanner::{Report, Severity, Task, TaskScanner, TaskScannerBuilder};

/// Result type alias for Tasklint operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
