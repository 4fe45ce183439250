use serde::{Deserialize, Serialize};

/// Immutable reference data for a person; identity by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Avatar URL, display-layer only.
    pub avatar: String,
}
