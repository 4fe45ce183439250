use serde::{Deserialize, Serialize};

/// Workflow position of a task, one of the three board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in column order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Wire/CLI spelling: `todo`, `in-progress`, `done`.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Column header spelling.
    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To do",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }

    /// Parse a CLI spelling. `progress` is accepted as shorthand, matching
    /// the sidebar category ids.
    pub fn parse(s: &str) -> Option<Status> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Some(Status::Todo),
            "in-progress" | "in_progress" | "progress" => Some(Status::InProgress),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

/// A unit of work on the board.
///
/// `assignees` holds user ids; the `User` records live once on the `Board`.
/// `date` is the creation date in display form (`24 Aug 2022`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Project id, empty when the task was created without one.
    pub project: String,
    pub status: Status,
    pub progress: u32,
    pub total_progress: u32,
    pub date: String,
    pub comments: u32,
    pub attachments: u32,
    pub assignees: Vec<String>,
}

/// Partial input from a creation dialog. Anything not given gets the
/// defaults the board views use: status todo, 0/10 progress, today's date,
/// no assignees.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub project: Option<String>,
    pub status: Option<Status>,
    pub progress: Option<u32>,
    pub total_progress: Option<u32>,
    pub assignees: Vec<String>,
}

impl NewTask {
    pub fn titled(title: &str, description: &str) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.to_string(),
            ..NewTask::default()
        }
    }
}
