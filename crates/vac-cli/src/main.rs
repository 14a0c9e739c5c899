//! vac-templates - render video annotation comment templates
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the templates and their placeholders
//! vac-templates templates
//!
//! # Render the comment list for a thread
//! vac-templates render comment-list --input thread.json --height 240px
//!
//! # Render the new comment composer
//! vac-templates render new-comment
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
