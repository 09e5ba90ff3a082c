//! A single entry in the chat transcript.

#[cfg(test)]
#[path = "turn_test.rs"]
mod turn_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Immutable once appended to a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
}

impl ConversationTurn {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, timestamp_ms: f64) -> Self {
        Self { id: Uuid::new_v4(), role, content: content.into(), timestamp_ms }
    }

    #[must_use]
    pub fn user(content: impl Into<String>, timestamp_ms: f64) -> Self {
        Self::new(Role::User, content, timestamp_ms)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>, timestamp_ms: f64) -> Self {
        Self::new(Role::Assistant, content, timestamp_ms)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
