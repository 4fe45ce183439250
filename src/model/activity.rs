use serde::{Deserialize, Serialize};

/// What happened to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Created,
    StatusChanged,
    CommentAdded,
    Assigned,
}

impl ActivityKind {
    /// Wire spelling, matching the serde rename.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Created => "created",
            ActivityKind::StatusChanged => "status_changed",
            ActivityKind::CommentAdded => "comment_added",
            ActivityKind::Assigned => "assigned",
        }
    }
}

/// One audit-trail entry. Stored flat on the `Board` and filtered by
/// `task_id`, a weak relation rather than containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub kind: ActivityKind,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    /// `StatusChanged` carries `"<old> → <new>"`, `CommentAdded` the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A comment on a task. Stored flat, like activity entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub text: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}
