//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod render;
pub mod templates;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vac_core::config::Config;

/// vac-templates - comment templates for video annotation widgets
#[derive(Debug, Parser)]
#[command(name = "vac-templates")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VAC_TEMPLATES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template
    Render(render::RenderArgs),

    /// Add a comment to a thread, as the composer's SAVE button does
    Comment(comment::CommentArgs),

    /// List templates and their placeholders
    Templates(templates::TemplatesArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    // Dispatch to command handler
    match cli.command {
        Commands::Render(args) => render::execute(args, &config_path),
        Commands::Comment(args) => comment::execute(args, &config_path),
        Commands::Templates(args) => templates::execute(args),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
