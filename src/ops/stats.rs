use serde::Serialize;

use crate::model::task::{Status, Task};
use crate::ops::query;

/// Per-status totals. All three statuses are always present, zero or not,
/// so column headers never disappear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn get(self, status: Status) -> usize {
        match status {
            Status::Todo => self.todo,
            Status::InProgress => self.in_progress,
            Status::Done => self.done,
        }
    }

    pub fn total(self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

pub fn status_counts<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            Status::Todo => counts.todo += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Done => counts.done += 1,
        }
    }
    counts
}

/// Percentage of done tasks, rounded; 0 on an empty snapshot.
pub fn completion_rate<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> u32 {
    let counts = status_counts(tasks);
    if counts.total() == 0 {
        return 0;
    }
    (100.0 * counts.done as f64 / counts.total() as f64).round() as u32
}

/// Completion rate restricted to one project (`"all"` covers everything).
pub fn project_progress(tasks: &[Task], project_id: &str) -> u32 {
    completion_rate(query::by_project(tasks, project_id).into_iter())
}

/// `progress / total_progress` in `[0, 1]`.
pub fn progress_ratio(task: &Task) -> f64 {
    if task.total_progress == 0 {
        return 0.0;
    }
    f64::from(task.progress) / f64::from(task.total_progress)
}

/// Color tier of a progress bar. Done always reads green, regardless of the
/// counters; past 0.6 amber, else rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Green,
    Amber,
    Rose,
}

impl ProgressTier {
    pub fn of(task: &Task) -> ProgressTier {
        if task.status == Status::Done {
            ProgressTier::Green
        } else if progress_ratio(task) > 0.6 {
            ProgressTier::Amber
        } else {
            ProgressTier::Rose
        }
    }
}

/// Label a project gets from its completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectHealth {
    Completed,
    NearComplete,
    InProgress,
    JustStarted,
}

impl ProjectHealth {
    pub fn of(percent: u32) -> ProjectHealth {
        if percent == 100 {
            ProjectHealth::Completed
        } else if percent > 75 {
            ProjectHealth::NearComplete
        } else if percent > 25 {
            ProjectHealth::InProgress
        } else {
            ProjectHealth::JustStarted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectHealth::Completed => "Completed",
            ProjectHealth::NearComplete => "Near Complete",
            ProjectHealth::InProgress => "In Progress",
            ProjectHealth::JustStarted => "Just Started",
        }
    }
}

/// Tasks a user appears on, in collection order.
pub fn assigned_tasks<'a>(tasks: &'a [Task], user_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.assignees.iter().any(|a| a == user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_counts_are_4_4_3() {
        let board = seed::demo_board();
        let counts = status_counts(&board.tasks);
        assert_eq!(
            counts,
            StatusCounts {
                todo: 4,
                in_progress: 4,
                done: 3
            }
        );
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn completion_rate_of_empty_is_zero() {
        assert_eq!(completion_rate([]), 0);
    }

    #[test]
    fn completion_rate_of_all_done_is_100() {
        let board = seed::demo_board();
        let done: Vec<Task> = board
            .tasks
            .iter()
            .filter(|t| t.status == Status::Done)
            .cloned()
            .collect();
        assert_eq!(done.len(), 3);
        assert_eq!(completion_rate(&done), 100);
    }

    #[test]
    fn seed_completion_rate_rounds() {
        let board = seed::demo_board();
        // 3 of 11 done = 27.27…% → 27.
        assert_eq!(completion_rate(&board.tasks), 27);
    }

    #[test]
    fn project_progress_restricts_to_one_project() {
        let board = seed::demo_board();
        // user-flow tasks (task9, task10, task11) are all done.
        assert_eq!(project_progress(&board.tasks, "user"), 100);
        assert_eq!(project_progress(&board.tasks, "design"), 0);
        assert_eq!(project_progress(&board.tasks, "all"), 27);
    }

    #[test]
    fn tier_thresholds() {
        let board = seed::demo_board();
        // task1: 7/10 todo → amber; task3: 3/10 todo → rose;
        // task9: done → green regardless of ratio.
        assert_eq!(ProgressTier::of(board.task("task1").unwrap()), ProgressTier::Amber);
        assert_eq!(ProgressTier::of(board.task("task3").unwrap()), ProgressTier::Rose);
        assert_eq!(ProgressTier::of(board.task("task9").unwrap()), ProgressTier::Green);
    }

    #[test]
    fn tier_boundary_is_strictly_above_0_6() {
        let mut task = seed::demo_board().task("task1").unwrap().clone();
        task.progress = 6;
        task.total_progress = 10;
        assert_eq!(ProgressTier::of(&task), ProgressTier::Rose);
    }

    #[test]
    fn health_labels() {
        assert_eq!(ProjectHealth::of(100).label(), "Completed");
        assert_eq!(ProjectHealth::of(76).label(), "Near Complete");
        assert_eq!(ProjectHealth::of(26).label(), "In Progress");
        assert_eq!(ProjectHealth::of(25).label(), "Just Started");
        assert_eq!(ProjectHealth::of(0).label(), "Just Started");
    }

    #[test]
    fn assigned_tasks_and_per_user_rate() {
        let board = seed::demo_board();
        let sarah = assigned_tasks(&board.tasks, "user2");
        let ids: Vec<&str> = sarah.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["task2", "task4", "task5", "task7", "task11"]);
        // One of Sarah's five tasks is done.
        assert_eq!(completion_rate(sarah.into_iter()), 20);
    }
}
