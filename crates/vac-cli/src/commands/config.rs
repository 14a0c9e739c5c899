//! Config command
//!
//! Manage vac-templates configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

use vac_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reset to default configuration
    Reset {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Reset { force } => reset_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = Config::load_or_default(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        if config_path.exists() {
            println!("{}", config_path.display().to_string().dimmed());
        } else {
            println!("{}", "(defaults, no configuration file)".dimmed());
        }
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

fn reset_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "⚠".yellow(),
            config_path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    Config::default()
        .save(config_path)
        .context(format!("Failed to write {}", config_path.display()))?;
    println!("{} Configuration reset: {}", "✓".green(), config_path.display());
    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    use colored::Colorize;

    if !config_path.exists() {
        println!("{} No configuration file, defaults are valid.", "✓".green());
        return Ok(());
    }

    Config::load(config_path).context("Configuration is invalid")?;
    println!("{} Configuration is valid.", "✓".green());
    Ok(())
}
