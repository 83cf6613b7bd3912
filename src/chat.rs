use crate::models::{ChatMessage, User};
use crate::seed;
use chrono::Local;
use uuid::Uuid;

/// Append-only group chat. No edit, no delete.
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: seed::seed_messages(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a message from `author`. Blank bodies are ignored.
    pub fn post(&mut self, author: &User, body: &str) -> Option<ChatMessage> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            message: body.to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
        };
        self.messages.push(message.clone());
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::ChatLog;
    use crate::seed;

    #[test]
    fn starts_with_the_seeded_conversation() {
        let chat = ChatLog::new();
        assert_eq!(chat.messages().len(), 5);
        assert_eq!(chat.messages()[0].user_name, "Marko Petrović");
    }

    #[test]
    fn posting_appends_in_order() {
        let mut chat = ChatLog::new();
        let author = seed::current_user();

        let posted = chat
            .post(&author, "  Vidimo se na terenu!  ")
            .expect("message posted");
        assert_eq!(posted.message, "Vidimo se na terenu!");
        assert_eq!(posted.user_id, author.id);
        assert_eq!(chat.messages().last(), Some(&posted));
    }

    #[test]
    fn blank_posts_are_ignored() {
        let mut chat = ChatLog::new();
        let before = chat.messages().len();

        assert!(chat.post(&seed::current_user(), "   ").is_none());
        assert_eq!(chat.messages().len(), before);
    }
}
