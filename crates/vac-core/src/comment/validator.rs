//! Comment validation

use super::model::Comment;
use crate::config::CommentConfig;
use crate::error::{Result, VacError};

/// Maximum comment body length (default)
pub const MAX_BODY_LENGTH: usize = 10000;

/// Validator for comments
pub struct CommentValidator {
    max_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_length: MAX_BODY_LENGTH,
        }
    }

    /// Create a new validator with custom max length
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Create a validator from comment settings
    pub fn from_config(config: &CommentConfig) -> Self {
        Self::with_max_length(config.max_body_length)
    }

    /// Validate a comment body
    pub fn validate_body(&self, body: &str) -> Result<()> {
        let trimmed = body.trim();

        if trimmed.is_empty() {
            return Err(VacError::Validation(
                "Comment body cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > self.max_length {
            return Err(VacError::Validation(format!(
                "Comment body exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        Ok(())
    }

    /// Validate an author identifier
    pub fn validate_user_id(&self, user_id: &str) -> Result<()> {
        if user_id.trim().is_empty() {
            return Err(VacError::Validation(
                "Comment author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a complete comment
    pub fn validate(&self, comment: &Comment) -> Result<()> {
        self.validate_user_id(&comment.meta.user_id)?;
        self.validate_body(&comment.body)
    }

    /// Build a comment from composer input, trimming the body
    pub fn compose(&self, user_id: &str, body: &str) -> Result<Comment> {
        let comment = Comment::new(user_id.trim(), body.trim());
        self.validate(&comment)?;
        Ok(comment)
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
