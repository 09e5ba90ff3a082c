//! Chat page state: the mentor session plus the responder that answers it.
//!
//! DESIGN
//! ======
//! Lives in an `RwSignal<ChatState>` provided by the chat page. The panel
//! calls `send`, schedules a timer until the ticket's `due_at_ms`, and calls
//! `deliver` with the ticket when it fires. `teardown` runs on cleanup so a
//! timer that slips through cannot append a reply to a dead page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use mentor::{ChatSession, ConversationTurn, PendingReply, ScriptedResponder, SubmitError};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct ChatState {
    session: ChatSession,
    responder: ScriptedResponder,
}

impl ChatState {
    pub fn new(user_name: Option<&str>, now_ms: f64) -> Self {
        Self { session: ChatSession::new(user_name, now_ms), responder: ScriptedResponder::default() }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        self.session.turns()
    }

    /// True while the mentor is "typing".
    pub fn loading(&self) -> bool {
        self.session.is_pending()
    }

    pub fn can_send(&self, text: &str) -> bool {
        self.session.can_submit(text)
    }

    /// Post the user's message.
    ///
    /// # Errors
    ///
    /// Propagates [`SubmitError`] from the session.
    pub fn send(&mut self, text: &str, now_ms: f64) -> Result<PendingReply, SubmitError> {
        self.session.submit(text, now_ms)
    }

    /// Append the mentor's reply for `reply_id`. Returns `false` for stale
    /// tickets.
    pub fn deliver(&mut self, reply_id: Uuid, now_ms: f64) -> bool {
        self.session.resolve(reply_id, &self.responder, now_ms).is_some()
    }

    /// Abandon any outstanding reply.
    pub fn teardown(&mut self) -> bool {
        self.session.cancel_pending()
    }
}
