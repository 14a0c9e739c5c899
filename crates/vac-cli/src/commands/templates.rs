//! Templates command
//!
//! List the built-in templates and the placeholders each one expects.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vac_core::templates::TemplateKind;

/// Arguments for the templates command
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw source of this template instead of listing
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
struct TemplateInfo {
    name: &'static str,
    placeholders: Vec<String>,
}

fn collect() -> Vec<TemplateInfo> {
    TemplateKind::all()
        .into_iter()
        .map(|kind| TemplateInfo {
            name: kind.name(),
            placeholders: kind.placeholders(),
        })
        .collect()
}

/// Execute the templates command
pub fn execute(args: TemplatesArgs) -> Result<()> {
    use colored::Colorize;

    if let Some(name) = args.source {
        let kind: TemplateKind = name.parse()?;
        print!("{}", kind.source());
        return Ok(());
    }

    let infos = collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in infos {
        println!("{}", info.name.bold());
        if info.placeholders.is_empty() {
            println!("  {}", "(static, no placeholders)".dimmed());
        }
        for placeholder in info.placeholders {
            println!("  {}", placeholder.cyan());
        }
    }

    Ok(())
}
