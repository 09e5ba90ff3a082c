//! Session-local chat transcript with a single outstanding reply.
//!
//! DESIGN
//! ======
//! `submit` appends the user turn and hands back a [`PendingReply`] ticket.
//! The caller waits until the ticket's `due_at_ms` (showing a loading
//! indicator) and then calls `resolve` with the ticket id. While a ticket is
//! outstanding further submissions are rejected; there is no queue. Teardown calls
//! `cancel_pending`, after which a late `resolve` is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use uuid::Uuid;

use crate::error::SubmitError;
use crate::responder::Responder;
use crate::templates::greeting;
use crate::turn::ConversationTurn;

pub const DEFAULT_REPLY_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub reply_delay_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { reply_delay_ms: DEFAULT_REPLY_DELAY_MS }
    }
}

/// Ticket for the reply owed to the most recent user turn.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    pub id: Uuid,
    pub prompt: String,
    pub submitted_at_ms: f64,
    pub due_at_ms: f64,
}

impl PendingReply {
    /// Whole milliseconds left until the reply is due, zero once overdue.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        (self.due_at_ms - now_ms).ceil().clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    config: ChatConfig,
    turns: Vec<ConversationTurn>,
    pending: Option<PendingReply>,
}

impl ChatSession {
    /// Start a transcript seeded with the mentor's greeting.
    #[must_use]
    pub fn new(user_name: Option<&str>, now_ms: f64) -> Self {
        Self::with_config(ChatConfig::default(), user_name, now_ms)
    }

    #[must_use]
    pub fn with_config(config: ChatConfig, user_name: Option<&str>, now_ms: f64) -> Self {
        Self { config, turns: vec![ConversationTurn::assistant(greeting(user_name), now_ms)], pending: None }
    }

    /// Turns in display order.
    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `text` would be accepted right now.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_pending() && !text.trim().is_empty()
    }

    /// Append a user turn and open a pending reply.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyMessage`] for blank input,
    /// [`SubmitError::ReplyPending`] while a previous reply is outstanding.
    pub fn submit(&mut self, text: &str, now_ms: f64) -> Result<PendingReply, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::ReplyPending);
        }
        let content = text.trim();
        if content.is_empty() {
            return Err(SubmitError::EmptyMessage);
        }

        self.turns.push(ConversationTurn::user(content, now_ms));
        let ticket = PendingReply {
            id: Uuid::new_v4(),
            prompt: content.to_owned(),
            submitted_at_ms: now_ms,
            due_at_ms: now_ms + f64::from(self.config.reply_delay_ms),
        };
        self.pending = Some(ticket.clone());
        Ok(ticket)
    }

    /// Answer the outstanding ticket `reply_id`. Stale or cancelled tickets
    /// return `None` and leave the transcript untouched.
    pub fn resolve(&mut self, reply_id: Uuid, responder: &dyn Responder, now_ms: f64) -> Option<&ConversationTurn> {
        let ticket = self.pending.take_if(|p| p.id == reply_id)?;
        self.turns.push(ConversationTurn::assistant(responder.respond(&ticket.prompt), now_ms));
        self.turns.last()
    }

    /// Drop the outstanding ticket without answering. Returns whether one was
    /// outstanding.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
