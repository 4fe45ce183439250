use serde::{Deserialize, Serialize};

/// A chat channel. Message history lives on the `Board`, keyed by this id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messenger {
    pub id: String,
    pub name: String,
    pub unread: u32,
}

/// One chat message. `sender` is a user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub content: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}
