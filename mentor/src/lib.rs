//! Scripted mentor conversation for the PathFinder chat demo.
//!
//! There is no model behind the chat. [`responder::ScriptedResponder`] picks a
//! canned Socratic reply by ordered keyword matching, and
//! [`session::ChatSession`] owns the transcript plus the single outstanding
//! reply that the UI resolves after a simulated delay. A real backend replaces
//! the responder behind the same [`responder::Responder`] trait.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`responder`] | `Responder` trait, ordered rules, `respond` |
//! | [`templates`] | Reply and greeting text |
//! | [`session`] | Transcript, pending-reply latch, config |
//! | [`turn`] | `ConversationTurn` and `Role` |
//! | [`identity`] | Display name derivation for the greeting |
//! | [`error`] | Submission errors |

pub mod error;
pub mod identity;
pub mod responder;
pub mod session;
pub mod templates;
pub mod turn;

pub use error::SubmitError;
pub use responder::{Responder, ScriptedResponder, respond};
pub use session::{ChatConfig, ChatSession, PendingReply};
pub use turn::{ConversationTurn, Role};
