//! Configuration command implementations

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::{ConfigCommands, Output};
use crate::config::TasklintConfig;
use crate::scanner::FileScanner;

const CONFIG_FILE: &str = "tasklint.toml";

/// Execute configuration commands
pub async fn execute(
    cmd: ConfigCommands,
    config_path: Option<&str>,
    format: &str,
    force: bool,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(force, output),
        ConfigCommands::Validate => validate(config_path, output),
        ConfigCommands::Show => show(config_path, format, output),
    }
}

/// Write a default configuration file to the current directory.
fn init(force: bool, output: &Output) -> Result<()> {
    if Path::new(CONFIG_FILE).exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    let rendered = toml::to_string_pretty(&TasklintConfig::default())
        .context("Failed to render default configuration")?;
    fs::write(CONFIG_FILE, rendered)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;

    output.success(&format!("Created {CONFIG_FILE}"));
    Ok(())
}

/// Load the configuration and compile its patterns and globs.
fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TasklintConfig::load(config_path)?;
    let scanner = FileScanner::from_config(&config)?;

    if scanner.has_invalid_pattern() {
        for line in scanner.compile_errors().lines() {
            output.error(line);
        }
        bail!("Configuration contains invalid patterns");
    }

    output.success("Configuration is valid");
    Ok(())
}

/// Print the effective merged configuration.
fn show(config_path: Option<&str>, format: &str, output: &Output) -> Result<()> {
    let config = TasklintConfig::load(config_path)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        _ => {
            output.header("Effective configuration");
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to render configuration")?
            );
        }
    }

    Ok(())
}
