use indexmap::IndexMap;

use super::activity::{ActivityEntry, Comment};
use super::messenger::{Message, Messenger};
use super::project::Project;
use super::reminder::Reminder;
use super::task::Task;
use super::user::User;

/// The single owned store for one session.
///
/// Every view reads from a `&Board` and mutates through `crate::ops`, which
/// takes `&mut Board`: the one-writer-at-a-time guarantee the original
/// page-level state relied on, made explicit. Comments and activity entries
/// are flat collections filtered by task id; chat histories are keyed by
/// messenger id in creation order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
    pub activity: Vec<ActivityEntry>,
    pub reminders: Vec<Reminder>,
    pub messengers: Vec<Messenger>,
    pub chats: IndexMap<String, Vec<Message>>,
    /// User mutations are attributed to when the caller does not say.
    pub session_user: String,
}

impl Board {
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn messenger(&self, id: &str) -> Option<&Messenger> {
        self.messengers.iter().find(|m| m.id == id)
    }

    pub fn messenger_mut(&mut self, id: &str) -> Option<&mut Messenger> {
        self.messengers.iter_mut().find(|m| m.id == id)
    }

    /// Comments on one task, in insertion order.
    pub fn comments_for(&self, task_id: &str) -> Vec<&Comment> {
        self.comments.iter().filter(|c| c.task_id == task_id).collect()
    }

    /// Activity entries for one task, in insertion order.
    pub fn activity_for(&self, task_id: &str) -> Vec<&ActivityEntry> {
        self.activity.iter().filter(|a| a.task_id == task_id).collect()
    }

    // Id allocation: one scheme for every record kind. The highest numeric
    // suffix in use, plus one. Ids with a non-numeric suffix don't count.

    pub fn next_task_id(&self) -> String {
        next_numbered("task", self.tasks.iter().map(|t| t.id.as_str()))
    }

    pub fn next_comment_id(&self) -> String {
        next_numbered("com", self.comments.iter().map(|c| c.id.as_str()))
    }

    pub fn next_activity_id(&self) -> String {
        next_numbered("act", self.activity.iter().map(|a| a.id.as_str()))
    }

    pub fn next_reminder_id(&self) -> String {
        next_numbered("reminder", self.reminders.iter().map(|r| r.id.as_str()))
    }

    pub fn next_messenger_id(&self) -> String {
        next_numbered("messenger", self.messengers.iter().map(|m| m.id.as_str()))
    }

    pub fn next_message_id(&self) -> String {
        next_numbered(
            "msg",
            self.chats.values().flatten().map(|m| m.id.as_str()),
        )
    }
}

fn next_numbered<'a>(prefix: &str, ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}
