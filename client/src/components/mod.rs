//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read page state from Leptos context and keep browser-only
//! wiring behind the `hydrate` feature so they also render on the server.

pub mod chat_panel;
pub mod count_up;
pub mod stat_card;
