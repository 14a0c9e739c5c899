//! Render contexts for the widget templates
//!
//! Views serialize to exactly the placeholder names the templates expect, so
//! the comment list can be filled from a [`crate::comment::CommentThread`].

mod comment_list;
mod renderer;

pub use comment_list::{CommentListView, CommentView, CommentViewMeta, NewCommentView};
pub use renderer::CommentRenderer;
