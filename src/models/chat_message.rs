use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the chat transcript. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    #[serde(rename = "type")]
    pub sender: Sender,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ChatMessage {
    pub fn user(id: u32, content: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            content: content.into(),
            options: None,
        }
    }

    pub fn bot(id: u32, content: impl Into<String>, options: &[&str]) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            content: content.into(),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
        }
    }
}
