//! Reply text used by the scripted mentor.

/// Mentor persona name shown in the chat header.
pub const MENTOR_NAME: &str = "Aryam";

/// Name used in the greeting when the visitor is anonymous.
pub const ANONYMOUS_NAME: &str = "there";

pub const CAREER_PATH_REPLY: &str = "That's a great question! Let me ask you this: What activities make you lose track of time? When you're deeply engaged, what are you usually doing? Understanding what naturally captivates you is the first step toward finding your ideal career path.";

pub const CONFUSED_REPLY: &str = "It's completely normal to feel confused, and you're definitely not alone! 💙 Many successful people started exactly where you are.

Let me ask you: When was the last time you felt truly excited about something? What was it about that moment that made you feel alive?";

pub const SKILL_REPLY: &str = "I love that you're thinking about skill development! That's the \"Upskill\" pillar in action.

Before I suggest resources, let me understand: What's your current level of experience with this? Have you tried anything yet, or are you starting from scratch? This will help me guide you to the right learning path.";

pub const INTERVIEW_REPLY: &str = "Preparing for interviews is crucial! I can help you with that.

But first, let me understand: What type of role are you targeting? And what's your biggest concern about the interview process - is it technical questions, behavioral questions, or something else?";

pub const FALLBACK_REPLY: &str = "That's an interesting point. Let me help you think through this with a few questions:

1. What have you already tried or considered?
2. What's holding you back, if anything?
3. What would success look like for you in this situation?

Understanding these will help us find the best path forward together.";

/// Opening assistant turn for a new chat.
#[must_use]
pub fn greeting(user_name: Option<&str>) -> String {
    let name = user_name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(ANONYMOUS_NAME);
    format!(
        "Hello {name}! I'm {MENTOR_NAME}, your AI mentor at Golden ARC Institute. I'm here to guide you through Socratic questioning, not just give answers.

What's been on your mind about your career journey? Feel free to share your thoughts, questions, or any challenges you're facing."
    )
}
