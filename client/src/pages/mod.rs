//! Route-level screens.
//!
//! Each page owns its state and delegates rendering details to
//! `components`.

pub mod chat;
pub mod home;
