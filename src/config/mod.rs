//! Configuration management for Tasklint
//!
//! Layered loading in priority order: built-in defaults, then a
//! `tasklint.toml`/`tasklint.yml`/`tasklint.json` file in the working
//! directory (or an explicit `--config` path), then `TASKLINT_` environment
//! variables.

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scanner::{CaseMode, MatcherMode};

/// Main configuration structure for Tasklint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TasklintConfig {
    /// Tag configuration per severity
    #[serde(default)]
    pub tags: TagsConfig,

    /// File scanning configuration
    #[serde(default)]
    pub scanner: ScanConfig,
}

/// Tag lists (or regular expressions) per severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// HIGH severity tags, comma-separated (or one regex in regexp mode)
    #[serde(default = "default_high")]
    pub high: String,

    /// NORMAL severity tags
    #[serde(default = "default_normal")]
    pub normal: String,

    /// LOW severity tags
    #[serde(default)]
    pub low: String,

    /// Match tags case-insensitively
    #[serde(default)]
    pub ignore_case: bool,

    /// Interpret the severity strings as regular expressions with two
    /// capture groups (tag, message)
    #[serde(default)]
    pub regexp: bool,
}

fn default_high() -> String {
    "FIXME".to_string()
}

fn default_normal() -> String {
    "TODO".to_string()
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            high: default_high(),
            normal: default_normal(),
            low: String::new(),
            ignore_case: false,
            regexp: false,
        }
    }
}

/// File scanning limits and execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob patterns for files to exclude from scanning
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Follow symbolic links while walking directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Skip files larger than this many megabytes
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// Maximum worker threads (0 = derive from CPU count)
    #[serde(default)]
    pub threads: usize,

    /// Percentage of CPU cores to use for parallel scans (1-100)
    #[serde(default = "default_thread_percentage")]
    pub thread_percentage: u8,

    /// Minimum file count before a directory scan goes parallel
    #[serde(default = "default_min_files_for_parallel")]
    pub min_files_for_parallel: usize,
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_thread_percentage() -> u8 {
    75
}

fn default_min_files_for_parallel() -> usize {
    50
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            follow_symlinks: false,
            max_file_size_mb: default_max_file_size_mb(),
            threads: 0,
            thread_percentage: default_thread_percentage(),
            min_files_for_parallel: default_min_files_for_parallel(),
        }
    }
}

impl TasklintConfig {
    /// Load configuration with the standard layering.
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(TasklintConfig::default()));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            figment = figment
                .merge(Toml::file("tasklint.toml"))
                .merge(Json::file("tasklint.json"))
                .merge(Yaml::file("tasklint.yaml"))
                .merge(Yaml::file("tasklint.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("TASKLINT_"));

        let config: TasklintConfig = figment.extract()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn case_mode(&self) -> CaseMode {
        if self.tags.ignore_case {
            CaseMode::IgnoreCase
        } else {
            CaseMode::CaseSensitive
        }
    }

    pub fn matcher_mode(&self) -> MatcherMode {
        if self.tags.regexp {
            MatcherMode::RegexpMatch
        } else {
            MatcherMode::StringMatch
        }
    }
}
