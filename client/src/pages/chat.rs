//! Chat page: one mentor conversation per visit.
//!
//! The visitor's name comes from the `name` query parameter, or failing
//! that from the local part of `email`. Without either the mentor greets
//! "there".

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use mentor::identity::display_name_from_email;
use mentor::templates::MENTOR_NAME;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::ChatState;
use crate::util::clock::now_ms;

/// Name to greet, preferring an explicit `name` over one derived from `email`.
pub fn visitor_name(name: Option<&str>, email: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .or_else(|| email.and_then(display_name_from_email))
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let query = use_query_map();
    let user_name = query.with_untracked(|q| visitor_name(q.get("name").as_deref(), q.get("email").as_deref()));

    let chat = RwSignal::new(ChatState::new(user_name.as_deref(), now_ms()));
    provide_context(chat);

    view! {
        <main class="chat-page">
            <header class="chat-page__header">
                <a class="chat-page__back" href="/">"← PathFinder"</a>
                <div class="chat-page__title">
                    <h2>{MENTOR_NAME}</h2>
                    <span class="chat-page__subtitle">"Your AI Career Mentor"</span>
                </div>
            </header>
            <ChatPanel/>
        </main>
    }
}
