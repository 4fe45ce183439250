use serde::Serialize;

use crate::model::activity::{ActivityEntry, Comment};
use crate::model::board::Board;
use crate::model::task::{Status, Task};
use crate::ops::stats::{self, ProgressTier, StatusCounts};
use crate::util::text::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project: String,
    pub status: Status,
    pub progress: u32,
    pub total_progress: u32,
    pub percent: u32,
    pub tier: ProgressTier,
    pub date: String,
    pub comments: u32,
    pub attachments: u32,
    pub assignees: Vec<String>,
}

#[derive(Serialize)]
pub struct TaskDetailJson {
    #[serde(flatten)]
    pub task: TaskJson,
    pub comment_log: Vec<Comment>,
    pub activity: Vec<ActivityEntry>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub counts: StatusCounts,
    pub total: usize,
    pub completion: u32,
}

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: String,
    pub name: String,
    pub tasks: usize,
    pub percent: u32,
    pub health: &'static str,
}

#[derive(Serialize)]
pub struct UserJson {
    pub id: String,
    pub name: String,
    pub tasks: usize,
    pub done: usize,
    pub completion: u32,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub todo: Vec<TaskJson>,
    pub in_progress: Vec<TaskJson>,
    pub done: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        project: task.project.clone(),
        status: task.status,
        progress: task.progress,
        total_progress: task.total_progress,
        percent: (stats::progress_ratio(task) * 100.0).round() as u32,
        tier: ProgressTier::of(task),
        date: task.date.clone(),
        comments: task.comments,
        attachments: task.attachments,
        assignees: task.assignees.clone(),
    }
}

pub fn stats_to_json(counts: StatusCounts, completion: u32) -> StatsJson {
    StatsJson {
        counts,
        total: counts.total(),
        completion,
    }
}

// ---------------------------------------------------------------------------
// Plain-text tables
// ---------------------------------------------------------------------------

/// Render the task table shown by `pl list`.
pub fn task_table(tasks: &[&Task]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {} {}\n",
        fit_to_width("ID", 7),
        fit_to_width("STATUS", 12),
        fit_to_width("PROG", 6),
        fit_to_width("DATE", 11),
        fit_to_width("PROJECT", 8),
        "TITLE"
    ));
    for task in tasks {
        out.push_str(&task_row(task));
        out.push('\n');
    }
    out
}

/// One task line, same columns as the table body.
pub fn task_row(task: &Task) -> String {
    let project = if task.project.is_empty() { "-" } else { &task.project };
    format!(
        "{} {} {} {} {} {}",
        fit_to_width(&task.id, 7),
        fit_to_width(task.status.as_str(), 12),
        fit_to_width(&format!("{}/{}", task.progress, task.total_progress), 6),
        fit_to_width(&task.date, 11),
        fit_to_width(project, 8),
        task.title
    )
}

/// Render the three stacked board columns shown by `pl board`.
pub fn board_columns(tasks: &[&Task]) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        let column: Vec<&&Task> = tasks.iter().filter(|t| t.status == status).collect();
        out.push_str(&format!("{} ({})\n", status.label(), column.len()));
        if column.is_empty() {
            out.push_str("  (empty)\n");
        }
        for task in column {
            out.push_str(&format!(
                "  {} {} {}\n",
                fit_to_width(&task.id, 7),
                fit_to_width(&format!("{}/{}", task.progress, task.total_progress), 6),
                task.title
            ));
        }
        out.push('\n');
    }
    // Drop the trailing blank line after the last column.
    out.pop();
    out
}

/// Resolve a user id to a display name, falling back to the raw id.
pub fn user_name<'a>(board: &'a Board, user_id: &'a str) -> &'a str {
    board
        .user(user_id)
        .map(|u| u.name.as_str())
        .unwrap_or(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn list_table_snapshot() {
        let board = seed::demo_board();
        let tasks: Vec<&Task> = board.tasks.iter().take(3).collect();
        insta::assert_snapshot!(task_table(&tasks), @r"
        ID      STATUS       PROG   DATE        PROJECT  TITLE
        task1   todo         7/10   24 Aug 2022 design   Design new UI presentation
        task2   todo         4/10   25 Aug 2022 design   Add more UI/UX mockups
        task3   todo         3/10   26 Aug 2022 design   Design few mobile screens
        ");
    }

    #[test]
    fn board_column_headers_carry_counts() {
        let board = seed::demo_board();
        let tasks: Vec<&Task> = board.tasks.iter().collect();
        let text = board_columns(&tasks);
        assert!(text.contains("To do (4)"));
        assert!(text.contains("In progress (4)"));
        assert!(text.contains("Done (3)"));
    }

    #[test]
    fn empty_column_is_marked() {
        let board = seed::demo_board();
        let todo_only: Vec<&Task> = board
            .tasks
            .iter()
            .filter(|t| t.status == Status::Todo)
            .collect();
        let text = board_columns(&todo_only);
        assert!(text.contains("Done (0)\n  (empty)"));
    }

    #[test]
    fn task_json_carries_percent_and_tier() {
        let board = seed::demo_board();
        let json = task_to_json(board.task("task1").unwrap());
        assert_eq!(json.percent, 70);
        let encoded = serde_json::to_string(&json).unwrap();
        assert!(encoded.contains("\"tier\":\"amber\""));
        assert!(encoded.contains("\"status\":\"todo\""));
    }
}
