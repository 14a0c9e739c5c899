//! Comment widget templates
//!
//! The two markup fragments rendered by the annotation comment widget. Both
//! are written in the Handlebars subset understood by [`crate::template`].

use crate::error::{Result, VacError};
use crate::template::Template;
use std::fmt;
use std::str::FromStr;

/// Thread of comments attached to an annotation, followed by its control bar.
///
/// Placeholders: `height`, `comments` (each item exposes `meta.user_id`,
/// `timeSince` and `body`) and the thread's own `timeSince`.
pub const COMMENT_LIST_TEMPLATE: &str = r#"
  <div class="vac-comments-container" style="height: {{height}};">
    {{#each comments as |comment|}}
      <div class="comment">
        <div class="comment-header">
          <div class="author-name">{{comment.meta.user_id}}</div>
          <div class="timestamp">{{comment.timeSince}} ago</div>
        </div>
        <div class="comment-body">
          {{comment.body}}
        </div>
      </div>
    {{/each}}
    <div class="reply-btn">CREATE REPLY</div>
  </div>
  <div class="vac-comments-control-bar">
    <div class="timestamp">{{timeSince}} ago</div>
    <div class="control-buttons">
      <a>DELETE</a> | <a class="vac-close-comment-list">CLOSE</a>
    </div>
  </div>
"#;

/// Composer for writing a new comment. Static markup.
pub const NEW_COMMENT_TEMPLATE: &str = r#"
  <div class="vac-video-write-new-wrap vac-control">
    <div class="vac-video-write-new comment">
      <div>
        <h5><b>New Comment</b></h5>
        <div>
          <textarea placeholder="Enter comment..."></textarea>
          <div>
            <button class="vac-button">SAVE</button>
            <a>Cancel</a>
          </div>
        </div>
      </div>
    </div>
  </div>
"#;

/// The built-in templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Comment thread for one annotation
    CommentList,
    /// New comment composer
    NewComment,
}

impl TemplateKind {
    /// Registry name of the template
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::CommentList => "comment-list",
            TemplateKind::NewComment => "new-comment",
        }
    }

    /// Raw template source
    pub fn source(&self) -> &'static str {
        match self {
            TemplateKind::CommentList => COMMENT_LIST_TEMPLATE,
            TemplateKind::NewComment => NEW_COMMENT_TEMPLATE,
        }
    }

    /// Parse from a registry name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment-list" => Some(TemplateKind::CommentList),
            "new-comment" => Some(TemplateKind::NewComment),
            _ => None,
        }
    }

    /// All built-in templates
    pub fn all() -> [TemplateKind; 2] {
        [TemplateKind::CommentList, TemplateKind::NewComment]
    }

    /// Placeholder expressions used by this template
    pub fn placeholders(&self) -> Vec<String> {
        // Built-in sources always parse.
        placeholders(self.source()).unwrap_or_default()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = VacError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| VacError::TemplateNotFound(s.to_string()))
    }
}

/// List the distinct placeholder expressions in a template source, in order
/// of first appearance.
pub fn placeholders(source: &str) -> Result<Vec<String>> {
    Ok(Template::parse(source)?.placeholders())
}
