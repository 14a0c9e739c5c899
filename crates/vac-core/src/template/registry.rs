//! Named template registry

use super::model::Template;
use super::renderer::Renderer;
use crate::error::{Result, VacError};
use crate::templates::TemplateKind;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Registry of compiled templates addressed by name
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
    renderer: Renderer,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in widget templates
    pub fn new() -> Result<Self> {
        let mut registry = Self::empty();

        for kind in TemplateKind::all() {
            registry
                .register(kind.name(), kind.source())
                .map_err(|e| e.with_context(format!("Failed to compile built-in template '{}'", kind)))?;
        }

        Ok(registry)
    }

    /// Create a registry with no templates
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            renderer: Renderer::new(),
        }
    }

    /// Set strict rendering
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.renderer = self.renderer.with_strict(strict);
        self
    }

    /// Compile and register a template, replacing any template of the same name
    pub fn register(&mut self, name: impl Into<String>, source: &str) -> Result<()> {
        let template = Template::parse(source)?;
        self.register_template(name, template);
        Ok(())
    }

    /// Register an already compiled template
    pub fn register_template(&mut self, name: impl Into<String>, template: Template) {
        let name = name.into();
        debug!("Registered template '{}'", name);
        self.templates.insert(name, template);
    }

    /// Render a template with a serializable context
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| VacError::TemplateNotFound(name.to_string()))?;
        let value = serde_json::to_value(context)?;

        debug!("Rendering template '{}'", name);
        self.renderer
            .render(template, &value)
            .map_err(|e| e.with_context(format!("Failed to render '{}'", name)))
    }

    /// Get a compiled template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Check if a template is registered
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get sorted list of template names
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }
}
