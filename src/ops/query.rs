use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::project::ALL_PROJECTS;
use crate::model::task::{Status, Task};
use crate::ops::stats::progress_ratio;
use crate::util::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Title,
    Progress,
}

impl SortField {
    pub fn parse(s: &str) -> Option<SortField> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(SortField::Date),
            "title" => Some(SortField::Title),
            "progress" => Some(SortField::Progress),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<SortOrder> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn flipped(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// A composed view over the task collection: filters intersect (AND), the
/// sort runs last over whatever survived.
///
/// Empty pieces mean "no filter": `project` of `None` or `"all"`, an empty
/// status set, and blank search text each pass everything through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub project: Option<String>,
    pub statuses: BTreeSet<Status>,
    pub search: String,
    pub sort: Option<(SortField, SortOrder)>,
}

impl TaskQuery {
    pub fn for_project(project_id: &str) -> Self {
        TaskQuery {
            project: Some(project_id.to_string()),
            ..TaskQuery::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(project) = &self.project
            && project != ALL_PROJECTS
            && task.project != *project
        {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&task.status) {
            return false;
        }
        let text = self.search.trim();
        if !text.is_empty() && !search_matches(task, text) {
            return false;
        }
        true
    }

    /// Filter then sort. Borrowed results keep collection order unless a
    /// sort is set; the sort is stable, so ties retain that order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let mut hits: Vec<&Task> = tasks.iter().filter(|t| self.matches(t)).collect();
        if let Some((field, order)) = self.sort {
            sort_tasks(&mut hits, field, order);
        }
        hits
    }
}

/// Case-insensitive substring match on title or description.
fn search_matches(task: &Task, text: &str) -> bool {
    let needle = text.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

pub fn sort_tasks(tasks: &mut [&Task], field: SortField, order: SortOrder) {
    tasks.sort_by(|a, b| {
        let cmp = compare(a, b, field);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

fn compare(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Date => dates::date_sort_key(&a.date).cmp(&dates::date_sort_key(&b.date)),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Progress => progress_ratio(a).total_cmp(&progress_ratio(b)),
    }
}

// Convenience single-filter views over a snapshot.

pub fn by_project<'a>(tasks: &'a [Task], project_id: &str) -> Vec<&'a Task> {
    TaskQuery::for_project(project_id).apply(tasks)
}

pub fn by_statuses<'a>(tasks: &'a [Task], statuses: &BTreeSet<Status>) -> Vec<&'a Task> {
    TaskQuery {
        statuses: statuses.clone(),
        ..TaskQuery::default()
    }
    .apply(tasks)
}

pub fn by_search<'a>(tasks: &'a [Task], text: &str) -> Vec<&'a Task> {
    TaskQuery {
        search: text.to_string(),
        ..TaskQuery::default()
    }
    .apply(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    fn ids<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn project_filter_selects_design_tasks() {
        let board = seed::demo_board();
        let hits = by_project(&board.tasks, "design");
        assert_eq!(ids(&hits), ["task1", "task2", "task3", "task5", "task6"]);
    }

    #[test]
    fn all_pseudo_project_returns_everything() {
        let board = seed::demo_board();
        assert_eq!(by_project(&board.tasks, "all").len(), board.tasks.len());
    }

    #[test]
    fn unknown_project_matches_nothing() {
        let board = seed::demo_board();
        assert!(by_project(&board.tasks, "ops").is_empty());
    }

    #[test]
    fn full_status_set_equals_no_filter() {
        let board = seed::demo_board();
        let full: BTreeSet<Status> = Status::ALL.into_iter().collect();
        assert_eq!(
            ids(&by_statuses(&board.tasks, &full)),
            ids(&TaskQuery::default().apply(&board.tasks))
        );
    }

    #[test]
    fn empty_status_set_means_no_filter() {
        let board = seed::demo_board();
        assert_eq!(
            by_statuses(&board.tasks, &BTreeSet::new()).len(),
            board.tasks.len()
        );
    }

    #[test]
    fn search_is_case_insensitive_over_both_fields() {
        let board = seed::demo_board();
        // "twitter" appears in task4's title and task11's description.
        assert_eq!(ids(&by_search(&board.tasks, "TWITTER")), ["task4", "task11"]);
    }

    #[test]
    fn blank_search_returns_all() {
        let board = seed::demo_board();
        assert_eq!(by_search(&board.tasks, "  ").len(), board.tasks.len());
    }

    #[test]
    fn filters_intersect() {
        let board = seed::demo_board();
        let query = TaskQuery {
            project: Some("design".into()),
            statuses: [Status::InProgress].into_iter().collect(),
            ..TaskQuery::default()
        };
        assert_eq!(ids(&query.apply(&board.tasks)), ["task5", "task6"]);
    }

    #[test]
    fn title_desc_is_exact_reverse_of_asc() {
        let board = seed::demo_board();
        let asc = TaskQuery {
            sort: Some((SortField::Title, SortOrder::Asc)),
            ..TaskQuery::default()
        };
        let desc = TaskQuery {
            sort: Some((SortField::Title, SortOrder::Desc)),
            ..TaskQuery::default()
        };
        let mut forward = ids(&asc.apply(&board.tasks));
        forward.reverse();
        assert_eq!(forward, ids(&desc.apply(&board.tasks)));
    }

    #[test]
    fn date_sort_crosses_month_and_year_boundaries() {
        let board = seed::demo_board();
        let query = TaskQuery {
            sort: Some((SortField::Date, SortOrder::Asc)),
            ..TaskQuery::default()
        };
        let sorted = query.apply(&board.tasks);
        // Jan 2022 tasks first, then Aug, then Nov.
        assert_eq!(sorted.first().unwrap().id, "task9");
        assert_eq!(sorted.last().unwrap().id, "task8");
    }

    #[test]
    fn progress_sort_compares_ratios_not_raw_counts() {
        let board = seed::demo_board();
        let query = TaskQuery {
            sort: Some((SortField::Progress, SortOrder::Asc)),
            ..TaskQuery::default()
        };
        let sorted = query.apply(&board.tasks);
        // task4 is 2/14 (~0.14), the smallest ratio even though task5 has a
        // larger denominator share at 3/10.
        assert_eq!(sorted.first().unwrap().id, "task4");
        assert_eq!(sorted.last().unwrap().status, Status::Done);
    }

    #[test]
    fn stable_sort_keeps_tied_order() {
        let board = seed::demo_board();
        let query = TaskQuery {
            sort: Some((SortField::Progress, SortOrder::Asc)),
            ..TaskQuery::default()
        };
        let sorted = query.apply(&board.tasks);
        let dones: Vec<&str> = sorted
            .iter()
            .filter(|t| t.status == Status::Done)
            .map(|t| t.id.as_str())
            .collect();
        // All three done tasks are 10/10; collection order must survive.
        assert_eq!(dones, ["task9", "task10", "task11"]);
    }
}
