//! # Conversation Log
//!
//! Append-only message history between the user and the companion.

use serde::{Deserialize, Serialize};

/// Timestamp label given to freshly sent messages
pub const JUST_NOW: &str = "Just now";

/// Message identifier, 1-based and strictly increasing in append order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using the app
    User,
    /// The companion persona
    Companion,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identifier
    pub id: MessageId,
    /// Message body as typed
    pub text: String,
    /// Relative timestamp label ("2 min ago", "Just now")
    pub time: String,
    /// Author
    pub sender: Sender,
}

impl Message {
    /// Whether the user wrote this message
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Ordered, append-only message sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log from seed messages, renumbering them 1..=n
    pub fn seeded(seed: impl IntoIterator<Item = (Sender, String, String)>) -> Self {
        let mut log = Self::new();
        for (sender, text, time) in seed {
            log.append(sender, text, time);
        }
        log
    }

    /// Send a user message.
    ///
    /// Blank input (empty after trimming) is ignored and returns `None`.
    /// The stored text is kept exactly as typed.
    pub fn send(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.append(Sender::User, text.to_string(), JUST_NOW.to_string());
        tracing::debug!(%id, "user message appended");
        Some(id)
    }

    fn append(&mut self, sender: Sender, text: String, time: String) -> MessageId {
        let id = MessageId(self.messages.len() as u64 + 1);
        self.messages.push(Message {
            id,
            text,
            time,
            sender,
        });
        id
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_sends_are_ignored() {
        let mut log = ConversationLog::new();
        assert_eq!(log.send(""), None);
        assert_eq!(log.send("   "), None);
        assert_eq!(log.send("\t\n"), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_send_appends_user_message() {
        let mut log = ConversationLog::seeded([(
            Sender::Companion,
            "Hi".to_string(),
            "1 min ago".to_string(),
        )]);
        let id = log.send("hello");

        assert_eq!(id, Some(MessageId(2)));
        assert_eq!(log.len(), 2);
        let last = log.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "hello");
        assert_eq!(last.time, JUST_NOW);
    }

    #[test]
    fn test_text_kept_as_typed() {
        let mut log = ConversationLog::new();
        log.send("  padded  ");
        assert_eq!(log.last().unwrap().text, "  padded  ");
    }

    #[test]
    fn test_ids_increase() {
        let mut log = ConversationLog::new();
        let a = log.send("a").unwrap();
        let b = log.send("b").unwrap();
        let c = log.send("c").unwrap();
        assert!(a < b && b < c);
    }
}
