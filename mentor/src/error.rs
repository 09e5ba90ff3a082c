//! Reasons a chat submission is rejected.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a reply is still pending")]
    ReplyPending,
}
