//! Template engine
//!
//! Parses and renders the Handlebars subset used by the widget templates:
//! escaped `{{path}}` and raw `{{{path}}}` expressions, `{{#each}}` blocks
//! with optional `as |item|` or `as |item index|` block parameters and an
//! `{{else}}` branch, and
//! `{{! comments }}`.
//!
//! # Example
//!
//! ```ignore
//! use vac_core::template::TemplateRegistry;
//!
//! let registry = TemplateRegistry::new()?;
//! let html = registry.render("comment-list", &view)?;
//! ```

mod model;
mod parser;
mod registry;
mod renderer;

pub use model::{EachBlock, Node, Path, PathKind, Template};
pub use registry::TemplateRegistry;
pub use renderer::{escape_html, Renderer};
