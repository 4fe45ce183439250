use tracing::debug;

use crate::model::activity::{ActivityEntry, ActivityKind, Comment};
use crate::model::board::Board;
use crate::model::task::{NewTask, Status, Task};
use crate::util::dates;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("user not found: {0}")]
    UnknownUser(String),
    #[error("task title is required")]
    TitleRequired,
    #[error("task description is required")]
    DescriptionRequired,
    #[error("comment text is required")]
    EmptyComment,
}

impl TaskError {
    /// Validation errors abort with the board untouched; the rest are stale
    /// references that views treat as a no-op notice.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TaskError::TitleRequired | TaskError::DescriptionRequired | TaskError::EmptyComment
        )
    }
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Move a task to a new status column.
///
/// Idempotent: moving to the current status changes nothing and logs
/// nothing. A real transition appends one `StatusChanged` activity entry
/// with `"<old> → <new>"`, no matter which view asked for the move.
pub fn move_task(
    board: &mut Board,
    task_id: &str,
    new_status: Status,
    by: &str,
) -> Result<(), TaskError> {
    let task = board
        .task_mut(task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;

    let old = task.status;
    if old == new_status {
        return Ok(());
    }
    task.status = new_status;

    debug!(task = task_id, from = old.as_str(), to = new_status.as_str(), "status changed");
    let details = format!("{} → {}", old.as_str(), new_status.as_str());
    log_activity(board, task_id, by, ActivityKind::StatusChanged, Some(details));
    Ok(())
}

/// Set the progress counter, clamped into `0..=total_progress`.
pub fn set_progress(board: &mut Board, task_id: &str, progress: u32) -> Result<(), TaskError> {
    let task = board
        .task_mut(task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
    task.progress = progress.min(task.total_progress);
    Ok(())
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Build a full task from a partial dialog input and append it.
/// Returns the assigned id.
///
/// Defaults: status todo, 0/10 progress, today's date, zero counters, no
/// assignees. Progress inputs are clamped, never rejected: `total_progress`
/// is raised to at least 1 and `progress` capped at `total_progress`.
/// All-or-nothing: any error leaves the board exactly as it was.
pub fn add_task(board: &mut Board, new: NewTask, by: &str) -> Result<String, TaskError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(TaskError::TitleRequired);
    }
    let description = new.description.trim();
    if description.is_empty() {
        return Err(TaskError::DescriptionRequired);
    }

    let mut assignees: Vec<String> = Vec::new();
    for user_id in &new.assignees {
        if board.user(user_id).is_none() {
            return Err(TaskError::UnknownUser(user_id.clone()));
        }
        if !assignees.contains(user_id) {
            assignees.push(user_id.clone());
        }
    }

    let total_progress = new.total_progress.unwrap_or(10).max(1);
    let progress = new.progress.unwrap_or(0).min(total_progress);

    let id = board.next_task_id();
    board.tasks.push(Task {
        id: id.clone(),
        title: title.to_string(),
        description: description.to_string(),
        project: new.project.unwrap_or_default(),
        status: new.status.unwrap_or(Status::Todo),
        progress,
        total_progress,
        date: dates::today_str(),
        comments: 0,
        attachments: 0,
        assignees,
    });

    debug!(task = id.as_str(), title, "task added");
    log_activity(board, &id, by, ActivityKind::Created, None);
    Ok(id)
}

/// Remove a task and its comments and activity entries. Deletion is
/// permanent and immediate within the session.
pub fn delete_task(board: &mut Board, task_id: &str) -> Result<(), TaskError> {
    let idx = board
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
    board.tasks.remove(idx);
    board.comments.retain(|c| c.task_id != task_id);
    board.activity.retain(|a| a.task_id != task_id);
    debug!(task = task_id, "task deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Assignees and comments
// ---------------------------------------------------------------------------

/// Add a user to a task's assignees. Logs an `Assigned` entry attributed to
/// the assigned user. Already-assigned is a quiet no-op.
pub fn assign_user(board: &mut Board, task_id: &str, user_id: &str) -> Result<(), TaskError> {
    if board.user(user_id).is_none() {
        return Err(TaskError::UnknownUser(user_id.to_string()));
    }
    let task = board
        .task_mut(task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;

    if task.assignees.iter().any(|a| a == user_id) {
        return Ok(());
    }
    task.assignees.push(user_id.to_string());

    debug!(task = task_id, user = user_id, "user assigned");
    log_activity(board, task_id, user_id, ActivityKind::Assigned, None);
    Ok(())
}

pub fn unassign_user(board: &mut Board, task_id: &str, user_id: &str) -> Result<(), TaskError> {
    let task = board
        .task_mut(task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
    task.assignees.retain(|a| a != user_id);
    Ok(())
}

/// Append a comment, bump the task's comment counter, and log a
/// `CommentAdded` entry carrying the text. Returns the comment id.
pub fn add_comment(
    board: &mut Board,
    task_id: &str,
    by: &str,
    text: &str,
) -> Result<String, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyComment);
    }
    let task = board
        .task_mut(task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
    task.comments += 1;

    let id = board.next_comment_id();
    board.comments.push(Comment {
        id: id.clone(),
        task_id: task_id.to_string(),
        user_id: by.to_string(),
        text: text.to_string(),
        timestamp: dates::now_timestamp(),
    });

    debug!(task = task_id, comment = id.as_str(), "comment added");
    log_activity(
        board,
        task_id,
        by,
        ActivityKind::CommentAdded,
        Some(text.to_string()),
    );
    Ok(id)
}

fn log_activity(
    board: &mut Board,
    task_id: &str,
    user_id: &str,
    kind: ActivityKind,
    details: Option<String>,
) {
    let entry = ActivityEntry {
        id: board.next_activity_id(),
        task_id: task_id.to_string(),
        user_id: user_id.to_string(),
        kind,
        timestamp: dates::now_timestamp(),
        details,
    };
    board.activity.push(entry);
}
