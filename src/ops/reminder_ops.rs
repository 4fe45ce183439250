use tracing::debug;

use crate::model::board::Board;
use crate::model::reminder::{Priority, Reminder};

/// Error type for reminder operations
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("reminder not found: {0}")]
    NotFound(String),
    #[error("reminder title is required")]
    TitleRequired,
    #[error("reminder time is required")]
    TimeRequired,
}

/// Append a reminder. `time` is free text shown as-is ("Tomorrow, 10:00 AM").
/// Returns the assigned id.
pub fn add_reminder(
    board: &mut Board,
    title: &str,
    time: &str,
    priority: Priority,
) -> Result<String, ReminderError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ReminderError::TitleRequired);
    }
    let time = time.trim();
    if time.is_empty() {
        return Err(ReminderError::TimeRequired);
    }

    let id = board.next_reminder_id();
    board.reminders.push(Reminder {
        id: id.clone(),
        title: title.to_string(),
        time: time.to_string(),
        priority,
    });
    debug!(reminder = id.as_str(), "reminder added");
    Ok(id)
}

pub fn delete_reminder(board: &mut Board, id: &str) -> Result<(), ReminderError> {
    let idx = board
        .reminders
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| ReminderError::NotFound(id.to_string()))?;
    board.reminders.remove(idx);
    debug!(reminder = id, "reminder deleted");
    Ok(())
}
