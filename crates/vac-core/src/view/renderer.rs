//! Comment widget renderer

use super::comment_list::{CommentListView, NewCommentView};
use crate::comment::CommentThread;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::template::TemplateRegistry;
use crate::templates::TemplateKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Renders the comment list and composer with the built-in templates
pub struct CommentRenderer {
    registry: TemplateRegistry,
    config: RenderConfig,
}

impl CommentRenderer {
    /// Create a renderer with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(RenderConfig::default())
    }

    /// Create a renderer with custom settings
    pub fn with_config(config: RenderConfig) -> Result<Self> {
        let registry = TemplateRegistry::new()?.with_strict(config.strict);
        Ok(Self { registry, config })
    }

    /// Render settings in use
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a thread at the configured default height, relative to the current time
    pub fn render_comment_list(&self, thread: &CommentThread) -> Result<String> {
        self.render_comment_list_at(thread, None, Utc::now())
    }

    /// Render a thread with an explicit height and reference time
    pub fn render_comment_list_at(
        &self,
        thread: &CommentThread,
        height: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let height = height.unwrap_or(&self.config.default_height);
        debug!(
            "Rendering comment list with {} comments at height {}",
            thread.len(),
            height
        );
        let view = CommentListView::from_thread(thread, height, now);
        self.render_view(TemplateKind::CommentList, &view)
    }

    /// Render the new comment composer
    pub fn render_new_comment(&self) -> Result<String> {
        self.render_view(TemplateKind::NewComment, &NewCommentView::default())
    }

    /// Render any built-in template with a caller-supplied context
    pub fn render_view<T: Serialize>(&self, kind: TemplateKind, view: &T) -> Result<String> {
        let output = self.registry.render(kind.name(), view)?;
        if self.config.trim_output {
            Ok(output.trim().to_string())
        } else {
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Comment;
    use crate::error::VacError;
    use crate::templates::NEW_COMMENT_TEMPLATE;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn thread() -> CommentThread {
        CommentThread::from_comments(vec![
            Comment::at("alice", "Look at this frame", base()),
            Comment::at("bob", "Agreed <3", base() + Duration::minutes(3)),
        ])
    }

    #[test]
    fn test_render_comment_list() {
        let renderer = CommentRenderer::new().unwrap();
        let html = renderer
            .render_comment_list_at(&thread(), Some("180px"), base() + Duration::minutes(5))
            .unwrap();

        assert!(html.contains(r#"style="height: 180px;""#));
        assert!(html.contains(r#"<div class="author-name">alice</div>"#));
        assert!(html.contains(r#"<div class="author-name">bob</div>"#));
        assert!(html.contains(r#"<div class="timestamp">5 minutes ago</div>"#));
        assert!(html.contains(r#"<div class="timestamp">2 minutes ago</div>"#));
        assert!(html.contains("Look at this frame"));
        assert!(html.contains("Agreed &lt;3"));
        assert_eq!(html.matches(r#"<div class="comment">"#).count(), 2);
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_comments_render_in_chronological_order() {
        let renderer = CommentRenderer::new().unwrap();
        let html = renderer
            .render_comment_list_at(&thread(), None, base() + Duration::hours(2))
            .unwrap();
        let alice = html.find("alice").unwrap();
        let bob = html.find("bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn test_deserialized_thread_renders_oldest_first() {
        let thread: CommentThread = serde_json::from_value(serde_json::json!({
            "comments": [
                {"meta": {"user_id": "bob", "datetime": "2024-06-01T12:10:00Z"}, "body": "later"},
                {"meta": {"user_id": "alice", "datetime": "2024-06-01T12:00:00Z"}, "body": "earlier"}
            ]
        }))
        .unwrap();

        let renderer = CommentRenderer::new().unwrap();
        let html = renderer
            .render_comment_list_at(&thread, None, base() + Duration::hours(1))
            .unwrap();

        assert!(html.find("alice").unwrap() < html.find("bob").unwrap());
        assert!(html.contains(r#"<div class="timestamp">1 hour ago</div>"#));
        assert!(html.contains(r#"<div class="timestamp">50 minutes ago</div>"#));
        let control_bar = &html[html.find("vac-comments-control-bar").unwrap()..];
        assert!(control_bar.contains(r#"<div class="timestamp">1 hour ago</div>"#));
    }

    #[test]
    fn test_default_height_from_config() {
        let config = RenderConfig {
            default_height: "50%".to_string(),
            ..RenderConfig::default()
        };
        let renderer = CommentRenderer::with_config(config).unwrap();
        let html = renderer.render_comment_list(&thread()).unwrap();
        assert!(html.contains(r#"style="height: 50%;""#));
    }

    #[test]
    fn test_empty_thread_renders_control_bar() {
        let renderer = CommentRenderer::new().unwrap();
        let html = renderer
            .render_comment_list_at(&CommentThread::new(), None, base())
            .unwrap();
        assert!(!html.contains(r#"<div class="comment">"#));
        assert!(html.contains("CREATE REPLY"));
        assert!(html.contains("vac-close-comment-list"));
    }

    #[test]
    fn test_render_new_comment() {
        let renderer = CommentRenderer::new().unwrap();
        assert_eq!(renderer.render_new_comment().unwrap(), NEW_COMMENT_TEMPLATE);
    }

    #[test]
    fn test_trim_output() {
        let config = RenderConfig {
            trim_output: true,
            ..RenderConfig::default()
        };
        let renderer = CommentRenderer::with_config(config).unwrap();
        let html = renderer.render_new_comment().unwrap();
        assert!(html.starts_with("<div class=\"vac-video-write-new-wrap vac-control\">"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_strict_render_view_missing_fields() {
        let config = RenderConfig {
            strict: true,
            ..RenderConfig::default()
        };
        let renderer = CommentRenderer::with_config(config).unwrap();
        let err = renderer
            .render_view(TemplateKind::CommentList, &serde_json::json!({"height": "1px"}))
            .unwrap_err();
        assert!(matches!(
            err,
            VacError::WithContext { ref source, .. } if matches!(**source, VacError::MissingValue(_))
        ));
    }
}
