//! Comment data models

use crate::types::{CommentId, ThreadId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comment on an annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    #[serde(default)]
    pub id: CommentId,
    /// Author and creation time
    pub meta: CommentMeta,
    /// Comment text
    pub body: String,
}

impl Comment {
    /// Create a comment stamped with the current time
    pub fn new(user_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self::at(user_id, body, Utc::now())
    }

    /// Create a comment with an explicit creation time
    pub fn at(user_id: impl Into<String>, body: impl Into<String>, datetime: DateTime<Utc>) -> Self {
        Self {
            id: CommentId::new(),
            meta: CommentMeta {
                user_id: user_id.into(),
                datetime,
            },
            body: body.into(),
        }
    }

    /// Replace the body
    pub fn update_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Author identifier
    pub fn user_id(&self) -> &str {
        &self.meta.user_id
    }

    /// Creation time
    pub fn datetime(&self) -> DateTime<Utc> {
        self.meta.datetime
    }
}

/// Comment metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentMeta {
    /// Author identifier
    pub user_id: String,
    /// When the comment was written
    pub datetime: DateTime<Utc>,
}

/// The comments attached to one annotation, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThreadRecord")]
pub struct CommentThread {
    /// Thread identifier
    pub id: ThreadId,
    /// Comments in chronological order
    comments: Vec<Comment>,
}

/// Serialized form of a thread, in whatever order the comments were stored
#[derive(Deserialize)]
struct ThreadRecord {
    #[serde(default)]
    id: ThreadId,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl From<ThreadRecord> for CommentThread {
    fn from(record: ThreadRecord) -> Self {
        let mut comments = record.comments;
        comments.sort_by_key(|c| c.meta.datetime);
        Self {
            id: record.id,
            comments,
        }
    }
}

impl CommentThread {
    /// Create an empty thread
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a thread from comments in any order
    pub fn from_comments(comments: impl IntoIterator<Item = Comment>) -> Self {
        let mut thread = Self::new();
        for comment in comments {
            thread.push(comment);
        }
        thread
    }

    /// Insert a comment, keeping chronological order.
    /// Comments with equal timestamps keep insertion order.
    pub fn push(&mut self, comment: Comment) {
        let pos = self
            .comments
            .partition_point(|c| c.meta.datetime <= comment.meta.datetime);
        self.comments.insert(pos, comment);
    }

    /// Remove a comment by id
    pub fn remove(&mut self, id: &CommentId) -> Option<Comment> {
        let pos = self.comments.iter().position(|c| &c.id == id)?;
        Some(self.comments.remove(pos))
    }

    /// Get a comment by id
    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Comments, oldest first
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The earliest comment, which opened the thread
    pub fn first(&self) -> Option<&Comment> {
        self.comments.first()
    }

    /// When the thread was started
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.first().map(|c| c.meta.datetime)
    }

    /// Number of comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if the thread has no comments
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Serialize the thread as pretty-printed JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a thread from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_comment_creation() {
        let comment = Comment::at("alice", "Nice shot", base());
        assert_eq!(comment.user_id(), "alice");
        assert_eq!(comment.body, "Nice shot");
        assert_eq!(comment.datetime(), base());
    }

    #[test]
    fn test_update_body() {
        let mut comment = Comment::new("alice", "draft");
        comment.update_body("final");
        assert_eq!(comment.body, "final");
    }

    #[test]
    fn test_thread_keeps_chronological_order() {
        let late = Comment::at("bob", "second", base() + Duration::minutes(5));
        let early = Comment::at("alice", "first", base());
        let thread = CommentThread::from_comments(vec![late, early]);

        let bodies: Vec<_> = thread.comments().iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
        assert_eq!(thread.started_at(), Some(base()));
    }

    #[test]
    fn test_thread_equal_timestamps_keep_insertion_order() {
        let mut thread = CommentThread::new();
        thread.push(Comment::at("a", "one", base()));
        thread.push(Comment::at("b", "two", base()));
        assert_eq!(thread.comments()[0].body, "one");
        assert_eq!(thread.comments()[1].body, "two");
    }

    #[test]
    fn test_thread_remove_and_get() {
        let comment = Comment::at("alice", "hello", base());
        let id = comment.id.clone();
        let mut thread = CommentThread::from_comments(vec![comment]);

        assert!(thread.get(&id).is_some());
        assert_eq!(thread.remove(&id).map(|c| c.body), Some("hello".to_string()));
        assert!(thread.is_empty());
        assert!(thread.remove(&id).is_none());
    }

    #[test]
    fn test_thread_from_json() {
        let json = r#"{
            "comments": [
                {"meta": {"user_id": "bob", "datetime": "2024-06-01T12:10:00Z"}, "body": "later"},
                {"meta": {"user_id": "alice", "datetime": "2024-06-01T12:00:00Z"}, "body": "earlier"}
            ]
        }"#;
        let thread = CommentThread::from_json(json).unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.first().unwrap().user_id(), "alice");
    }

    #[test]
    fn test_nested_thread_deserializes_in_order() {
        #[derive(Deserialize)]
        struct Annotation {
            thread: CommentThread,
        }

        let annotation: Annotation = serde_json::from_value(serde_json::json!({
            "thread": {
                "comments": [
                    {"meta": {"user_id": "bob", "datetime": "2024-06-01T12:10:00Z"}, "body": "later"},
                    {"meta": {"user_id": "alice", "datetime": "2024-06-01T12:00:00Z"}, "body": "earlier"}
                ]
            }
        }))
        .unwrap();

        let thread = annotation.thread;
        assert_eq!(thread.first().unwrap().user_id(), "alice");
        assert_eq!(thread.started_at(), Some(base()));
        assert_eq!(thread.comments()[1].user_id(), "bob");
    }

    #[test]
    fn test_thread_json_keeps_ids() {
        let thread = CommentThread::from_comments(vec![Comment::at("alice", "hi", base())]);
        let restored = CommentThread::from_json(&thread.to_json().unwrap()).unwrap();
        assert_eq!(restored, thread);
    }

    #[test]
    fn test_thread_from_invalid_json() {
        assert!(CommentThread::from_json("{\"comments\": 3}").is_err());
    }

    #[test]
    fn test_comment_serialization_shape() {
        let comment = Comment::at("alice", "hi", base());
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["meta"]["user_id"], "alice");
        assert_eq!(value["body"], "hi");
    }
}
