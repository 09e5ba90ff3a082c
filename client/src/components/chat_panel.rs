//! Mentor chat transcript with a message composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<ChatState>` from context. Sending posts the
//! user turn immediately and schedules the mentor's reply after the session's
//! configured delay; the composer stays disabled until it lands.

use leptos::prelude::*;
use mentor::ConversationTurn;
use mentor::templates::MENTOR_NAME;

use crate::state::chat::ChatState;
use crate::util::clock::{clock_label, local_offset_minutes, now_ms};
use crate::util::timer::OneShot;

/// Chat transcript plus input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let utc_offset = RwSignal::new(0.0_f64);
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let reply_timer = StoredValue::new_local(None::<OneShot>);

    // Server renders UTC; switch to the browser's zone once hydrated.
    Effect::new(move || utc_offset.set(local_offset_minutes()));

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // Focus the composer on mount, and again when a reply re-enables it.
    Effect::new(move || {
        if chat.with(ChatState::loading) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(err) = el.focus() {
                    log::warn!("composer focus failed: {err:?}");
                }
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(Ok(ticket)) = chat.try_update(|state| state.send(&text, now_ms())) else {
            return;
        };
        input.set(String::new());

        let timer = OneShot::schedule(ticket.remaining_ms(now_ms()), move || {
            chat.try_update(|state| state.deliver(ticket.id, now_ms()));
        });
        reply_timer.set_value(Some(timer));
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || chat.with(ChatState::loading);
    let can_send = move || chat.with(|state| state.can_send(&input.get()));

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        reply_timer.try_update_value(Option::take);
        chat.try_update(ChatState::teardown);
    });

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let offset = utc_offset.get();
                    chat.with(|state| state.turns().iter().map(|turn| turn_view(turn, offset)).collect_view())
                }}

                {move || {
                    loading()
                        .then(|| {
                            view! {
                                <div class="chat-panel__loading">{format!("{MENTOR_NAME} is thinking...")}</div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=format!("Type your message to {MENTOR_NAME}...")
                    autofocus=true
                    node_ref=input_ref
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
            <p class="chat-panel__hint">
                {format!("{MENTOR_NAME} uses Socratic questioning to guide you. Press Enter to send.")}
            </p>
        </div>
    }
}

fn turn_view(turn: &ConversationTurn, utc_offset_minutes: f64) -> impl IntoView + use<> {
    let is_user = turn.is_user();
    let content = turn.content.clone();
    let time = clock_label(turn.timestamp_ms, utc_offset_minutes);

    view! {
        <div
            class="chat-panel__message"
            class:chat-panel__message--user=is_user
            class:chat-panel__message--assistant=!is_user
        >
            <div class="chat-panel__bubble">{content}</div>
            <span class="chat-panel__time">{time}</span>
        </div>
    }
}
