//! Command-line interface for Tasklint
//!
//! This module provides the main CLI structure and command handling for
//! Tasklint. It uses clap for argument parsing and provides a clean,
//! user-friendly interface.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// Tasklint - Fast task-tag scanner for source trees
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Force overwrite without prompting
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan files or directories for task tags
    Scan(ScanArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Arguments for the scan command
#[derive(Args)]
pub struct ScanArgs {
    /// Specific files to scan (comma-separated or multiple -i flags)
    #[arg(short = 'i', long, value_delimiter = ',')]
    pub files: Vec<String>,

    /// Scan a specific directory recursively
    #[arg(short, long)]
    pub directory: Option<String>,

    /// HIGH severity tags, comma-separated (or one regex with --regexp)
    #[arg(long)]
    pub high: Option<String>,

    /// NORMAL severity tags
    #[arg(long)]
    pub normal: Option<String>,

    /// LOW severity tags
    #[arg(long)]
    pub low: Option<String>,

    /// Interpret severity strings as regular expressions (two capture
    /// groups: tag, message)
    #[arg(long)]
    pub regexp: bool,

    /// Match tags case-insensitively
    #[arg(long)]
    pub ignore_case: bool,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default tasklint.toml to the current directory
    Init,
    /// Validate configuration
    Validate,
    /// Show the effective merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Scan(args)) => {
                commands::scan::execute(args, self.config.as_deref(), &self.format, &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(
                    cmd,
                    self.config.as_deref(),
                    &self.format,
                    self.force,
                    &output,
                )
                .await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
