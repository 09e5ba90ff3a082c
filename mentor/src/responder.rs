//! Keyword-matched canned replies.
//!
//! Rules are evaluated in order against the lowercased input and the first
//! match wins. The order is part of the contract: "I'm confused about my
//! career" answers with the career-path reply because that rule comes first.

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

use crate::templates::{CAREER_PATH_REPLY, CONFUSED_REPLY, FALLBACK_REPLY, INTERVIEW_REPLY, SKILL_REPLY};

/// Anything that can answer a user message.
pub trait Responder {
    fn respond(&self, text: &str) -> String;
}

/// A reply chosen when the input contains any of `keywords`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `lowered` must already be lowercase; keywords are stored lowercase.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const DEFAULT_RULES: &[Rule] = &[
    Rule { keywords: &["career", "path"], reply: CAREER_PATH_REPLY },
    Rule { keywords: &["confused", "don't know"], reply: CONFUSED_REPLY },
    Rule { keywords: &["skill", "learn"], reply: SKILL_REPLY },
    Rule { keywords: &["interview", "job"], reply: INTERVIEW_REPLY },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedResponder {
    rules: &'static [Rule],
    fallback: &'static str,
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, FALLBACK_REPLY)
    }
}

impl ScriptedResponder {
    #[must_use]
    pub fn new(rules: &'static [Rule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// The first rule matching `text`, if any.
    #[must_use]
    pub fn matching_rule(&self, text: &str) -> Option<&'static Rule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    #[must_use]
    pub fn reply_for(&self, text: &str) -> &'static str {
        self.matching_rule(text).map_or(self.fallback, |rule| rule.reply)
    }
}

impl Responder for ScriptedResponder {
    fn respond(&self, text: &str) -> String {
        self.reply_for(text).to_owned()
    }
}

/// Answer `text` with the default script.
#[must_use]
pub fn respond(text: &str) -> String {
    ScriptedResponder::default().respond(text)
}
