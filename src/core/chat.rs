//! Scripted volunteer assistant.
//!
//! Each turn is classified on its own by keyword substrings; there is no
//! memory of earlier intents.

use crate::errors::{AppError, AppResult};
use crate::models::chat_message::{ChatMessage, Sender};

pub const GREETING: &str = "Hi! I'm your volunteer assistant. I can help you find opportunities, answer questions, or guide you through the volunteering process. What would you like to know?";

pub const MAIN_MENU: &[&str] = &[
    "Find opportunities",
    "How to get started",
    "Track my hours",
    "Connect with others",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    FindOpportunities,
    GetStarted,
    TrackHours,
    Connect,
    Fallback,
}

struct Reply {
    intent: Intent,
    keywords: &'static [&'static str],
    response: &'static str,
    options: &'static [&'static str],
}

// Checked top to bottom, first hit wins.
const REPLIES: &[Reply] = &[
    Reply {
        intent: Intent::FindOpportunities,
        keywords: &["find", "opportunities"],
        response: "I can help you find volunteer opportunities! What type of volunteering interests you? (e.g., Environmental, Education, Community Service)",
        options: &["Environmental", "Education", "Community Service", "Healthcare", "Other"],
    },
    Reply {
        intent: Intent::GetStarted,
        keywords: &["start"],
        response: "Getting started is easy! First, update your profile with your interests and availability. Then, browse opportunities that match your preferences. Need help with any of these steps?",
        options: &["Update profile", "Browse opportunities", "Get recommendations"],
    },
    Reply {
        intent: Intent::TrackHours,
        keywords: &["hours"],
        response: "You can track your volunteer hours in the Dashboard. Would you like me to show you how to log your hours?",
        options: &["Log hours", "View history", "Generate report"],
    },
    Reply {
        intent: Intent::Connect,
        keywords: &["connect"],
        response: "You can connect with other volunteers through our Community tab. You can join groups, participate in discussions, and find volunteer buddies!",
        options: MAIN_MENU,
    },
];

const FALLBACK: Reply = Reply {
    intent: Intent::Fallback,
    keywords: &[],
    response: "I'm here to help! Could you please be more specific about what you're looking for?",
    options: MAIN_MENU,
};

impl Intent {
    pub fn classify(text: &str) -> Self {
        lookup(text).intent
    }

    /// Canned response text and follow-up options for this intent.
    pub fn reply(self) -> (&'static str, &'static [&'static str]) {
        let r = REPLIES
            .iter()
            .find(|r| r.intent == self)
            .unwrap_or(&FALLBACK);
        (r.response, r.options)
    }
}

fn lookup(text: &str) -> &'static Reply {
    let lower = text.to_lowercase();
    REPLIES
        .iter()
        .find(|r| r.keywords.iter().any(|k| lower.contains(k)))
        .unwrap_or(&FALLBACK)
}

/// Append-only chat log for one session.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Starts with the assistant greeting and the main menu.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(1, GREETING, MAIN_MENU)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_bot_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.sender == Sender::Bot)
    }

    /// Append the user's text and the assistant reply; returns the reply.
    pub fn send(&mut self, text: &str) -> AppResult<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let reply = lookup(text);
        log::debug!("classified {:?} as {:?}", text, reply.intent);

        let next = self.messages.len() as u32;
        self.messages.push(ChatMessage::user(next + 1, text));
        self.messages
            .push(ChatMessage::bot(next + 2, reply.response, reply.options));

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Pick option `index` (0-based) offered by bot message `message_id`.
    /// The option text goes through [`Transcript::send`] like typed input.
    pub fn select_option(&mut self, message_id: u32, index: usize) -> AppResult<&ChatMessage> {
        let option = self
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .and_then(|m| m.options.as_ref())
            .and_then(|opts| opts.get(index))
            .cloned()
            .ok_or(AppError::InvalidOption { message_id, index })?;

        self.send(&option)
    }
}
