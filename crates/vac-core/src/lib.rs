//! vac-core - Core library for vac-templates
//!
//! This crate provides the comment list and new comment templates used by the
//! video annotation comment widget, along with the comment data model, the
//! relative time formatting shown in the templates, and a renderer for the
//! Handlebars subset the templates are written in.

pub mod error;
pub mod types;
pub mod config;
pub mod templates;
pub mod time_since;
pub mod comment;
pub mod template;
pub mod view;

pub use error::{Result, VacError};
pub use templates::{TemplateKind, COMMENT_LIST_TEMPLATE, NEW_COMMENT_TEMPLATE};
pub use types::*;
