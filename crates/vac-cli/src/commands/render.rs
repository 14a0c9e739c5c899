//! Render command
//!
//! Render the comment list or the new comment composer.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use vac_core::comment::CommentThread;
use vac_core::config::Config;
use vac_core::templates::TemplateKind;
use vac_core::view::CommentRenderer;

/// Template options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TemplateChoice {
    /// Comment thread of an annotation
    CommentList,
    /// New comment composer
    NewComment,
}

impl From<TemplateChoice> for TemplateKind {
    fn from(choice: TemplateChoice) -> Self {
        match choice {
            TemplateChoice::CommentList => TemplateKind::CommentList,
            TemplateChoice::NewComment => TemplateKind::NewComment,
        }
    }
}

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template to render
    #[arg(value_enum)]
    pub template: TemplateChoice,

    /// Comment thread JSON file ("-" for stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// CSS height of the comment list (defaults to render.default_height)
    #[arg(long)]
    pub height: Option<String>,

    /// Reference time for relative timestamps (RFC 3339, defaults to now)
    #[arg(long)]
    pub now: Option<String>,

    /// Fail on placeholders without a value
    #[arg(long)]
    pub strict: bool,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the render command
pub fn execute(args: RenderArgs, config_path: &Path) -> Result<()> {
    use colored::Colorize;

    let mut config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    if args.strict {
        config.render.strict = true;
    }

    let renderer = CommentRenderer::with_config(config.render)?;

    let output = match TemplateKind::from(args.template) {
        TemplateKind::CommentList => {
            let input = args
                .input
                .as_deref()
                .context("The comment list needs a thread. Use --input <FILE>")?;
            let thread = read_thread(input)?;
            let now = parse_now(args.now.as_deref())?;
            info!("Rendering {} comments", thread.len());
            renderer.render_comment_list_at(&thread, args.height.as_deref(), now)?
        }
        TemplateKind::NewComment => {
            let unused: Vec<&str> = [
                ("--input", args.input.is_some()),
                ("--height", args.height.is_some()),
                ("--now", args.now.is_some()),
                ("--strict", args.strict),
            ]
            .into_iter()
            .filter_map(|(flag, given)| given.then_some(flag))
            .collect();
            if !unused.is_empty() {
                bail!(
                    "The new comment template has no placeholders; remove {}",
                    unused.join(", ")
                );
            }
            renderer.render_new_comment()?
        }
    };

    if let Some(output_path) = args.output {
        fs::write(&output_path, &output)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Rendered to {}", "✓".green(), output_path.display());
    } else {
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn read_thread(path: &Path) -> Result<CommentThread> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read thread from stdin")?;
        buf
    } else {
        fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?
    };

    CommentThread::from_json(&content).context(format!("Invalid comment thread in {}", path.display()))
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .context(format!("Invalid --now timestamp: {}", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
