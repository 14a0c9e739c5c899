//! Error types for vac-templates

use thiserror::Error;

/// Main error type for vac-templates
#[derive(Debug, Error)]
pub enum VacError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Template source could not be parsed
    #[error("Template syntax error at offset {offset}: {message}")]
    TemplateSyntax { offset: usize, message: String },

    /// No template registered under this name
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A placeholder resolved to nothing while rendering in strict mode
    #[error("Missing value for placeholder: {0}")]
    MissingValue(String),

    /// A placeholder resolved to a value that has no text form
    #[error("Value for placeholder '{0}' cannot be rendered as text")]
    NotRenderable(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VacError>,
    },
}

impl VacError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VacError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        VacError::TemplateSyntax {
            offset,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for VacError {
    fn from(err: toml::de::Error) -> Self {
        VacError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for VacError {
    fn from(err: toml::ser::Error) -> Self {
        VacError::Toml(err.to_string())
    }
}

/// Result type alias for vac-templates
pub type Result<T> = std::result::Result<T, VacError>;
