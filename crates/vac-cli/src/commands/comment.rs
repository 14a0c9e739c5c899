//! Comment command
//!
//! Append a validated comment to a thread file.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use vac_core::comment::{CommentThread, CommentValidator};
use vac_core::config::Config;

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Comment thread JSON file (created if missing)
    #[arg(long, short)]
    pub thread: PathBuf,

    /// Author identifier
    #[arg(long, short)]
    pub user: String,

    /// Comment text
    #[arg(long, short)]
    pub body: String,
}

/// Execute the comment command
pub fn execute(args: CommentArgs, config_path: &Path) -> Result<()> {
    use colored::Colorize;

    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    let validator = CommentValidator::from_config(&config.comments);

    let mut thread = if args.thread.exists() {
        let content = fs::read_to_string(&args.thread)
            .context(format!("Failed to read {}", args.thread.display()))?;
        CommentThread::from_json(&content)
            .context(format!("Invalid comment thread in {}", args.thread.display()))?
    } else {
        CommentThread::new()
    };

    let comment = validator.compose(&args.user, &args.body)?;
    let id = comment.id.clone();
    thread.push(comment);
    info!("Thread now has {} comments", thread.len());

    write_atomic(&args.thread, &thread.to_json()?)
        .context(format!("Failed to write to {}", args.thread.display()))?;
    eprintln!("{} Added comment {}", "✓".green(), id.to_string().cyan());

    Ok(())
}

/// Write through a temp file and rename, so a failed write leaves the old thread intact
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_file_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thread.json");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("thread.tmp").exists());
    }
}
