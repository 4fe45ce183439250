use tracing::debug;

use crate::model::board::Board;
use crate::model::messenger::{Message, Messenger};
use crate::util::dates;

/// Error type for chat operations
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat not found: {0}")]
    NotFound(String),
    #[error("chat name is required")]
    NameRequired,
    #[error("message text is required")]
    EmptyMessage,
}

/// Create a chat with an empty history and nothing unread.
/// Returns the assigned id.
pub fn create_chat(board: &mut Board, name: &str) -> Result<String, ChatError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ChatError::NameRequired);
    }

    let id = board.next_messenger_id();
    board.messengers.push(Messenger {
        id: id.clone(),
        name: name.to_string(),
        unread: 0,
    });
    board.chats.insert(id.clone(), Vec::new());
    debug!(chat = id.as_str(), "chat created");
    Ok(id)
}

/// Remove a chat and its history.
pub fn delete_chat(board: &mut Board, id: &str) -> Result<(), ChatError> {
    let idx = board
        .messengers
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| ChatError::NotFound(id.to_string()))?;
    board.messengers.remove(idx);
    board.chats.shift_remove(id);
    debug!(chat = id, "chat deleted");
    Ok(())
}

/// Append a message to a chat's history. Returns the message id.
pub fn send_message(
    board: &mut Board,
    chat_id: &str,
    sender: &str,
    text: &str,
) -> Result<String, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    if board.messenger(chat_id).is_none() {
        return Err(ChatError::NotFound(chat_id.to_string()));
    }

    let id = board.next_message_id();
    let message = Message {
        id: id.clone(),
        sender: sender.to_string(),
        content: text.to_string(),
        timestamp: dates::now_timestamp(),
    };
    board.chats.entry(chat_id.to_string()).or_default().push(message);
    debug!(chat = chat_id, message = id.as_str(), "message sent");
    Ok(id)
}

/// Opening a chat clears its unread counter.
pub fn open_chat(board: &mut Board, id: &str) -> Result<(), ChatError> {
    let chat = board
        .messenger_mut(id)
        .ok_or_else(|| ChatError::NotFound(id.to_string()))?;
    chat.unread = 0;
    Ok(())
}

/// Case-insensitive name search over the chat list.
pub fn filter_chats<'a>(board: &'a Board, text: &str) -> Vec<&'a Messenger> {
    let needle = text.trim().to_lowercase();
    board
        .messengers
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_starts_empty_and_read() {
        let mut board = seed::demo_board();
        let id = create_chat(&mut board, "Support").unwrap();
        assert_eq!(id, "messenger5");
        let chat = board.messenger(&id).unwrap();
        assert_eq!(chat.unread, 0);
        assert!(board.chats[&id].is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut board = seed::demo_board();
        assert!(matches!(create_chat(&mut board, "  "), Err(ChatError::NameRequired)));
    }

    #[test]
    fn send_appends_in_order() {
        let mut board = seed::demo_board();
        let history_len = board.chats["messenger1"].len();

        send_message(&mut board, "messenger1", "user1", "on my way").unwrap();

        let history = &board.chats["messenger1"];
        assert_eq!(history.len(), history_len + 1);
        assert_eq!(history.last().unwrap().content, "on my way");
        assert_eq!(history.last().unwrap().sender, "user1");
    }

    #[test]
    fn send_to_unknown_chat_fails() {
        let mut board = seed::demo_board();
        assert!(matches!(
            send_message(&mut board, "messenger9", "user1", "hi"),
            Err(ChatError::NotFound(_))
        ));
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut board = seed::demo_board();
        assert!(matches!(
            send_message(&mut board, "messenger1", "user1", "   "),
            Err(ChatError::EmptyMessage)
        ));
    }

    #[test]
    fn open_clears_unread() {
        let mut board = seed::demo_board();
        assert!(board.messenger("messenger3").unwrap().unread > 0);
        open_chat(&mut board, "messenger3").unwrap();
        assert_eq!(board.messenger("messenger3").unwrap().unread, 0);
    }

    #[test]
    fn delete_drops_history_too() {
        let mut board = seed::demo_board();
        delete_chat(&mut board, "messenger2").unwrap();
        assert!(board.messenger("messenger2").is_none());
        assert!(!board.chats.contains_key("messenger2"));
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let board = seed::demo_board();
        let hits = filter_chats(&board, "des");
        let names: Vec<&str> = hits.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Design"]);
        assert_eq!(filter_chats(&board, "").len(), 4);
    }
}
