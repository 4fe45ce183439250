use serde::{Deserialize, Serialize};

/// The pseudo project id that means "no project filter".
pub const ALL_PROJECTS: &str = "all";

/// Static reference entry tasks point at via their `project` field.
/// Nothing enforces referential integrity; a task may carry a project id
/// with no matching entry here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}
