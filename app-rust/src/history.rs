//! Shaping stored chat messages into model requests.

use crate::types::{Attachment, ChatMessage, ChatRole};
use cognipath_sdk::{Message, ModelMessage, Part, UserMessage};

/// Number of prior messages replayed to the model on every turn.
pub const HISTORY_WINDOW: usize = 20;

/// Request parts for one turn: the attachment first, then the text.
#[must_use]
pub fn to_parts(text: &str, attachment: Option<&Attachment>) -> Vec<Part> {
    let mut parts = Vec::with_capacity(2);
    if let Some(attachment) = attachment {
        parts.push(Part::inline_data(
            attachment.data.clone(),
            attachment.mime_type.clone(),
        ));
    }
    if !text.is_empty() {
        parts.push(Part::text(text));
    }
    parts
}

/// Convert the last [`HISTORY_WINDOW`] messages into request history, oldest
/// first. Messages that would carry no parts are dropped.
#[must_use]
pub fn format_history(messages: &[ChatMessage]) -> Vec<Message> {
    let start = messages.len().saturating_sub(HISTORY_WINDOW);
    messages[start..]
        .iter()
        .filter_map(|message| {
            let parts = to_parts(&message.text, message.attachment.as_ref());
            if parts.is_empty() {
                return None;
            }
            Some(match message.role {
                ChatRole::User => Message::User(UserMessage { content: parts }),
                ChatRole::Model => Message::Model(ModelMessage { content: parts }),
            })
        })
        .collect()
}
