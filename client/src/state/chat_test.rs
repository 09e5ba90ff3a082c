#![allow(clippy::float_cmp)]

use super::*;
use mentor::Role;
use mentor::templates::{CAREER_PATH_REPLY, FALLBACK_REPLY, INTERVIEW_REPLY};

fn state() -> ChatState {
    ChatState::new(Some("Maya"), 0.0)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_state_opens_with_named_greeting() {
    let s = state();
    assert_eq!(s.turns().len(), 1);
    assert_eq!(s.turns()[0].role, Role::Assistant);
    assert!(s.turns()[0].content.starts_with("Hello Maya!"));
    assert!(!s.loading());
}

#[test]
fn anonymous_state_greets_there() {
    let s = ChatState::new(None, 0.0);
    assert!(s.turns()[0].content.starts_with("Hello there!"));
}

#[test]
fn reply_is_due_one_second_after_send() {
    let mut s = state();
    let ticket = s.send("hello", 250.0).expect("send");
    assert_eq!(ticket.remaining_ms(250.0), 1000);
    assert_eq!(ticket.due_at_ms, 1250.0);
}

// =============================================================
// Send / deliver
// =============================================================

#[test]
fn send_then_deliver_appends_scripted_reply() {
    let mut s = state();
    let ticket = s.send("I need a career path", 10.0).expect("send");
    assert!(s.loading());
    assert!(!s.can_send("another"));

    assert!(s.deliver(ticket.id, 1010.0));
    assert!(!s.loading());
    let last = s.turns().last().expect("reply");
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, CAREER_PATH_REPLY);
    assert_eq!(last.timestamp_ms, 1010.0);
}

#[test]
fn unmatched_message_gets_fallback() {
    let mut s = state();
    let ticket = s.send("hello", 0.0).expect("send");
    assert!(s.deliver(ticket.id, 1000.0));
    assert_eq!(s.turns().last().map(|t| t.content.as_str()), Some(FALLBACK_REPLY));
}

#[test]
fn send_while_loading_is_rejected() {
    let mut s = state();
    let _ticket = s.send("job hunting", 0.0).expect("send");
    assert_eq!(s.send("again", 1.0), Err(SubmitError::ReplyPending));
    assert_eq!(s.turns().len(), 2);
}

#[test]
fn blank_send_is_rejected() {
    let mut s = state();
    assert_eq!(s.send("   ", 0.0), Err(SubmitError::EmptyMessage));
    assert_eq!(s.turns().len(), 1);
}

#[test]
fn deliver_with_unknown_ticket_is_ignored() {
    let mut s = state();
    let _ticket = s.send("interview tips", 0.0).expect("send");
    assert!(!s.deliver(Uuid::new_v4(), 1000.0));
    assert!(s.loading());
    assert_eq!(s.turns().len(), 2);
}

#[test]
fn loading_tracks_the_reply_lifecycle() {
    let mut s = state();
    assert!(!s.loading());
    let ticket = s.send("what skill should I learn", 0.0).expect("send");
    assert!(s.loading());
    assert!(s.deliver(ticket.id, 1000.0));
    assert!(!s.loading());
    assert!(s.can_send("next question"));
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_drops_pending_reply() {
    let mut s = state();
    let ticket = s.send("interview tips", 0.0).expect("send");
    assert!(s.teardown());
    assert!(!s.deliver(ticket.id, 1000.0));
    assert_eq!(s.turns().len(), 2);
    assert!(!s.loading());
}

#[test]
fn conversation_continues_after_reply() {
    let mut s = state();
    let first = s.send("career", 0.0).expect("send");
    s.deliver(first.id, 1000.0);
    let second = s.send("job", 2000.0).expect("send");
    s.deliver(second.id, 3000.0);
    assert_eq!(s.turns().len(), 5);
    assert_eq!(s.turns()[4].content, INTERVIEW_REPLY);
}
