//! Scan command implementation
//!
//! Resolves configuration, applies command-line overrides, runs the file
//! scanner and renders the findings.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::cli::{Output, ScanArgs};
use crate::config::TasklintConfig;
use crate::scanner::{DirectoryScan, FileScanner, Severity};

/// Execute the scan command
pub async fn execute(
    args: ScanArgs,
    config_path: Option<&str>,
    format: &str,
    output: &Output,
) -> Result<()> {
    output.header("🔍 Task Scanning");

    let mut config = TasklintConfig::load(config_path)?;
    apply_overrides(&mut config, &args);

    let scanner = FileScanner::from_config(&config)?;

    // Invalid patterns disable their severity only; surface them and keep
    // scanning with the remaining rules.
    if scanner.has_invalid_pattern() {
        for line in scanner.compile_errors().lines() {
            output.warning(line);
        }
        output.info("Continuing with the remaining valid rules");
    }

    let scan = if !args.files.is_empty() {
        output.step("Scanning specified files");
        let mut paths = Vec::new();
        for file in &args.files {
            let path = Path::new(file);
            if path.exists() {
                paths.push(path.to_path_buf());
                output.verbose(&format!("Queued: {file}"));
            } else {
                output.warning(&format!("File not found: {file}"));
            }
        }
        scanner.scan_paths(&paths)?
    } else if let Some(dir) = &args.directory {
        let dir_path = Path::new(dir);
        if !dir_path.is_dir() {
            bail!("Directory not found or not a directory: {dir}");
        }
        output.step(&format!("Scanning directory: {dir}"));
        scanner.scan_directory(dir_path)?
    } else {
        output.step("Scanning current directory");
        scanner.scan_directory(&PathBuf::from("."))?
    };

    for warning in &scan.warnings {
        output.warning(&warning.message);
    }

    output.blank_line();
    display_scan_results(&scan, format, output)?;

    Ok(())
}

/// Command-line flags win over file and environment configuration.
fn apply_overrides(config: &mut TasklintConfig, args: &ScanArgs) {
    if let Some(high) = &args.high {
        config.tags.high = high.clone();
    }
    if let Some(normal) = &args.normal {
        config.tags.normal = normal.clone();
    }
    if let Some(low) = &args.low {
        config.tags.low = low.clone();
    }
    if args.regexp {
        config.tags.regexp = true;
    }
    if args.ignore_case {
        config.tags.ignore_case = true;
    }
}

/// Display scan results in the specified format
fn display_scan_results(scan: &DirectoryScan, format: &str, output: &Output) -> Result<()> {
    match format {
        "json" => {
            let json_output = serde_json::to_string_pretty(&scan.tasks)?;
            println!("{}", json_output);
        }
        _ => {
            if scan.tasks.is_empty() {
                output.success("No task tags found");
            } else {
                output.count("📋", "Open tasks", scan.tasks.len());
                output.blank_line();

                for (i, task) in scan.tasks.iter().enumerate() {
                    output.warning(&format!(
                        "{}. [{}] {} at {}:{}",
                        i + 1,
                        task.severity,
                        task.tag,
                        task.file,
                        task.line
                    ));
                    if !task.message.is_empty() {
                        output.indent(&task.message);
                    }
                }

                output.blank_line();
            }

            output.separator();
            output.summary_stats("Files scanned:", scan.stats.files_scanned);
            output.summary_stats("Files skipped:", scan.stats.files_skipped);
            for severity in Severity::PRIORITY_ORDER {
                let count = scan.tasks.iter().filter(|t| t.severity == severity).count();
                output.summary_stats(&format!("{severity} priority:"), count);
            }
            output.verbose(&format!(
                "Scan completed in {} ms",
                scan.stats.scan_duration_ms
            ));
        }
    }

    Ok(())
}
