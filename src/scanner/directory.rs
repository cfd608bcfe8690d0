//! File and directory scanning on top of the stream scanner.
//!
//! Applies one compiled rule set to many files: exclude globs, a file size
//! cap, gitignore-aware directory walking and sequential-or-parallel
//! execution. Unreadable files are skipped and reported as warnings, never
//! fatal.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::Serialize;
use tracing::debug;

use super::core::{TaskScanner, TaskScannerBuilder};
use super::parallel::ExecutionStrategy;
use super::types::{Severity, Task};
use crate::config::TasklintConfig;

/// One finding located in a file.
#[derive(Debug, Clone, Serialize)]
pub struct FileTask {
    pub file: String,
    pub severity: Severity,
    pub tag: String,
    pub line: usize,
    pub message: String,
}

impl FileTask {
    fn new(path: &Path, task: Task) -> Self {
        Self {
            file: path.display().to_string(),
            severity: task.severity,
            tag: task.tag,
            line: task.line,
            message: task.message,
        }
    }
}

/// Statistics from one scanning operation
#[derive(Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub total_tasks: usize,
    pub scan_duration_ms: u64,
}

/// Warning generated during scanning
#[derive(Debug)]
pub struct Warning {
    pub message: String,
}

/// Result of scanning a set of files or a directory tree
#[derive(Debug)]
pub struct DirectoryScan {
    pub tasks: Vec<FileTask>,
    pub stats: ScanStats,
    pub warnings: Vec<Warning>,
}

/// Outcome of scanning a single file, used for result aggregation.
struct ScanFileOutcome {
    file: String,
    tasks: Vec<FileTask>,
    error: Option<String>,
}

/// Scans files and directories for task tags.
pub struct FileScanner {
    scanner: TaskScanner,
    exclude: GlobSet,
    follow_symlinks: bool,
    max_file_size_mb: u64,
    threads: usize,
    thread_percentage: u8,
    min_files_for_parallel: usize,
}

impl FileScanner {
    /// Build a scanner with rules and limits from configuration.
    pub fn from_config(config: &TasklintConfig) -> Result<Self> {
        let scanner = TaskScannerBuilder::new()
            .high(&config.tags.high)
            .normal(&config.tags.normal)
            .low(&config.tags.low)
            .case_mode(config.case_mode())
            .matcher_mode(config.matcher_mode())
            .build();

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.scanner.exclude_patterns {
            let glob =
                Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .context("Failed to build exclude pattern globset")?;

        Ok(Self {
            scanner,
            exclude,
            follow_symlinks: config.scanner.follow_symlinks,
            max_file_size_mb: config.scanner.max_file_size_mb,
            threads: config.scanner.threads,
            thread_percentage: config.scanner.thread_percentage,
            min_files_for_parallel: config.scanner.min_files_for_parallel,
        })
    }

    /// True if at least one configured pattern failed to compile. The
    /// remaining severities still scan.
    pub fn has_invalid_pattern(&self) -> bool {
        self.scanner.has_invalid_pattern()
    }

    /// Pattern compilation errors, one per line.
    pub fn compile_errors(&self) -> String {
        self.scanner.errors()
    }

    /// Scan a single file. Excluded and oversized files yield no findings.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<FileTask>> {
        if !self.should_scan(path) {
            debug!(path = %path.display(), "skipping excluded file");
            return Ok(Vec::new());
        }

        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() / (1024 * 1024) > self.max_file_size_mb {
                debug!(path = %path.display(), "skipping oversized file");
                return Ok(Vec::new());
            }
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let report = self.scanner.scan_str(&content);
        Ok(report
            .tasks
            .into_iter()
            .map(|task| FileTask::new(path, task))
            .collect())
    }

    /// Scan an explicit list of files sequentially.
    pub fn scan_paths(&self, paths: &[PathBuf]) -> Result<DirectoryScan> {
        let start_time = Instant::now();
        let outcomes: Vec<ScanFileOutcome> =
            paths.iter().map(|path| self.scan_outcome(path)).collect();
        Ok(aggregate(outcomes, start_time))
    }

    /// Scan a directory tree, honoring gitignore rules and hidden-file
    /// conventions. Large trees fan out over a worker pool; result order is
    /// walk order either way.
    pub fn scan_directory(&self, path: &Path) -> Result<DirectoryScan> {
        let start_time = Instant::now();
        let mut warnings = Vec::new();

        let mut file_paths = Vec::new();
        let walker = WalkBuilder::new(path)
            .follow_links(self.follow_symlinks)
            .build();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        file_paths.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    warnings.push(Warning {
                        message: format!("Walk error: {e}"),
                    });
                }
            }
        }

        let workers =
            ExecutionStrategy::calculate_optimal_workers(self.threads, self.thread_percentage);
        let strategy =
            ExecutionStrategy::auto(file_paths.len(), self.min_files_for_parallel, workers);
        debug!(files = file_paths.len(), ?strategy, "scanning directory");

        let outcomes = strategy.execute(file_paths, |path| self.scan_outcome(path))?;

        let mut scan = aggregate(outcomes, start_time);
        scan.warnings.splice(0..0, warnings);
        Ok(scan)
    }

    fn scan_outcome(&self, path: &Path) -> ScanFileOutcome {
        match self.scan_file(path) {
            Ok(tasks) => ScanFileOutcome {
                file: path.display().to_string(),
                tasks,
                error: None,
            },
            Err(e) => ScanFileOutcome {
                file: path.display().to_string(),
                tasks: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Check a path against the exclude globs, both as given and relative
    /// to the current directory.
    fn should_scan(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        if let Ok(current_dir) = std::env::current_dir() {
            if let Ok(relative) = path.strip_prefix(&current_dir) {
                if self.exclude.is_match(relative) {
                    return false;
                }
            }
        }
        true
    }
}

fn aggregate(outcomes: Vec<ScanFileOutcome>, start_time: Instant) -> DirectoryScan {
    let mut tasks = Vec::new();
    let mut warnings = Vec::new();
    let mut stats = ScanStats::default();

    for outcome in outcomes {
        match outcome.error {
            None => {
                stats.files_scanned += 1;
                tasks.extend(outcome.tasks);
            }
            Some(error) => {
                stats.files_skipped += 1;
                warnings.push(Warning {
                    message: format!("Failed to scan {}: {}", outcome.file, error),
                });
            }
        }
    }

    stats.total_tasks = tasks.len();
    stats.scan_duration_ms = start_time.elapsed().as_millis() as u64;

    DirectoryScan {
        tasks,
        stats,
        warnings,
    }
}
