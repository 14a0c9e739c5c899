//! Comment list and composer contexts

use crate::comment::{Comment, CommentThread};
use crate::time_since::time_since_at;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Author fields of a rendered comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentViewMeta {
    pub user_id: String,
}

/// One comment as the comment list renders it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub meta: CommentViewMeta,
    #[serde(rename = "timeSince")]
    pub time_since: String,
    pub body: String,
}

impl CommentView {
    /// Build from a comment relative to `now`
    pub fn from_comment(comment: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            meta: CommentViewMeta {
                user_id: comment.meta.user_id.clone(),
            },
            time_since: time_since_at(comment.meta.datetime, now),
            body: comment.body.clone(),
        }
    }
}

/// Context for the comment list template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentListView {
    pub height: String,
    #[serde(rename = "timeSince")]
    pub time_since: String,
    pub comments: Vec<CommentView>,
}

impl CommentListView {
    /// Build from a thread; the thread's own time is that of its first comment
    pub fn from_thread(thread: &CommentThread, height: impl Into<String>, now: DateTime<Utc>) -> Self {
        let time_since = thread
            .started_at()
            .map(|started| time_since_at(started, now))
            .unwrap_or_default();

        Self {
            height: height.into(),
            time_since,
            comments: thread
                .comments()
                .iter()
                .map(|c| CommentView::from_comment(c, now))
                .collect(),
        }
    }
}

/// Context for the new comment composer, which has no placeholders
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NewCommentView {}
