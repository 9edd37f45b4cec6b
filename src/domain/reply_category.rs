use std::fmt;

const GREETING_KEYWORDS: [&str; 3] = ["hello", "hi", "hey"];

const GREETING_REPLIES: [&str; 3] = [
    "Hello! How can I help you today?",
    "Hi there! What can I do for you?",
    "Hey! Thanks for reaching out. How can I assist you?",
];

const QUESTION_REPLIES: [&str; 3] = [
    "That's a great question. Let me look into it for you.",
    "Good question! A member of our team will follow up with the details.",
    "Thanks for asking. I'm checking on that right now.",
];

const HELP_REPLIES: [&str; 3] = [
    "I'm here to help. Could you tell me a bit more about what you need?",
    "Happy to help! What seems to be the problem?",
    "Sure, I can help with that. Please share a few more details.",
];

const DEFAULT_REPLIES: [&str; 3] = [
    "Thanks for your message. I'll get back to you shortly.",
    "Got it! Is there anything else I can help you with?",
    "Understood. Let me know if you need anything else.",
];

/// Bucket a message falls into when picking a canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    Greeting,
    Question,
    Help,
    Default,
}

impl ReplyCategory {
    /// First matching rule wins: greeting keywords, then `?`, then "help".
    /// Matching is plain substring containment on the lowercased, trimmed text.
    pub fn classify(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();

        if GREETING_KEYWORDS.iter().any(|k| normalized.contains(k)) {
            ReplyCategory::Greeting
        } else if normalized.contains('?') {
            ReplyCategory::Question
        } else if normalized.contains("help") {
            ReplyCategory::Help
        } else {
            ReplyCategory::Default
        }
    }

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            ReplyCategory::Greeting => &GREETING_REPLIES,
            ReplyCategory::Question => &QUESTION_REPLIES,
            ReplyCategory::Help => &HELP_REPLIES,
            ReplyCategory::Default => &DEFAULT_REPLIES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCategory::Greeting => "greeting",
            ReplyCategory::Question => "question",
            ReplyCategory::Help => "help",
            ReplyCategory::Default => "default",
        }
    }
}

impl fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
