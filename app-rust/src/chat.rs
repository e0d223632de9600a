use crate::{
    config::require_model,
    history::{format_history, to_parts},
    instruction::ChatMode,
    store::JsonStore,
    types::{new_id, now_millis, Attachment, ChatMessage, ChatRole, Feedback},
    ScholarError, ScholarResult,
};
use cognipath_sdk::{LanguageModel, LanguageModelInput, Message, UserMessage};
use std::sync::Arc;
use tracing::Instrument;

/// Reply stored when the model answers with no text.
pub const FALLBACK_REPLY: &str = "I apologize, I'm having trouble connecting right now.";

/// Id of the greeting message seeded into an empty conversation.
pub const GREETING_ID: &str = "init";

/// One persisted conversation with the tutor or the counsellor.
pub struct ChatSurface {
    mode: ChatMode,
    model: Option<Arc<dyn LanguageModel>>,
    store: JsonStore,
}

impl ChatSurface {
    pub fn new(
        mode: ChatMode,
        model: Option<Arc<dyn LanguageModel>>,
        store: JsonStore,
    ) -> Self {
        Self { mode, model, store }
    }

    #[must_use]
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    /// The stored conversation, or the greeting when nothing is stored yet.
    pub fn messages(&self) -> ScholarResult<Vec<ChatMessage>> {
        match self.store.load::<Vec<ChatMessage>>(self.mode.storage_key())? {
            Some(messages) => Ok(messages),
            None => Ok(vec![ChatMessage {
                id: GREETING_ID.to_string(),
                role: ChatRole::Model,
                text: self.mode.greeting().to_string(),
                timestamp: now_millis(),
                feedback: None,
                attachment: None,
            }]),
        }
    }

    fn save(&self, messages: &[ChatMessage]) -> ScholarResult<()> {
        self.store.save(self.mode.storage_key(), messages)
    }

    /// Send a user turn and wait for the reply.
    ///
    /// The user message is persisted before the model is called, so it
    /// survives a failed request. Returns the model message that was
    /// appended.
    pub async fn send(
        &self,
        text: &str,
        attachment: Option<Attachment>,
    ) -> ScholarResult<ChatMessage> {
        if text.trim().is_empty() && attachment.is_none() {
            return Err(ScholarError::InvalidInput(
                "a message needs text or an attachment".to_string(),
            ));
        }
        if attachment.is_some() && !self.mode.accepts_attachments() {
            return Err(ScholarError::InvalidInput(format!(
                "the {} does not accept attachments",
                self.mode
            )));
        }

        let model = require_model(self.model.as_ref())?;

        let span = tracing::info_span!("chat.send", mode = %self.mode);
        async move {
            let mut messages = self.messages()?;
            let history = format_history(&messages);

            let user_message = ChatMessage {
                id: new_id(),
                role: ChatRole::User,
                text: text.to_string(),
                timestamp: now_millis(),
                feedback: None,
                attachment,
            };
            let turn = to_parts(&user_message.text, user_message.attachment.as_ref());
            messages.push(user_message);
            self.save(&messages)?;

            let mut request = history;
            request.push(Message::User(UserMessage { content: turn }));
            tracing::debug!(history = request.len() - 1, "sending chat turn");

            let response = model
                .generate(LanguageModelInput {
                    system_prompt: Some(self.mode.system_instruction().to_string()),
                    messages: request,
                    ..Default::default()
                })
                .await
                .map_err(|error| {
                    tracing::error!(%error, "chat request failed");
                    ScholarError::from(error)
                })?;

            let reply = response
                .text()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_REPLY.to_string());

            let model_message = ChatMessage {
                id: new_id(),
                role: ChatRole::Model,
                text: reply,
                timestamp: now_millis(),
                feedback: None,
                attachment: None,
            };

            // Re-read so edits made while the request was in flight survive.
            let mut messages = self.messages()?;
            messages.push(model_message.clone());
            self.save(&messages)?;

            Ok(model_message)
        }
        .instrument(span)
        .await
    }

    /// Record whether a model reply helped. Replaces any earlier feedback.
    pub fn give_feedback(
        &self,
        message_id: &str,
        is_helpful: bool,
        comment: Option<String>,
    ) -> ScholarResult<ChatMessage> {
        let mut messages = self.messages()?;
        let message = messages
            .iter_mut()
            .find(|message| message.id == message_id)
            .ok_or_else(|| ScholarError::NotFound(format!("message '{message_id}'")))?;

        if message.role != ChatRole::Model {
            return Err(ScholarError::InvalidInput(
                "feedback can only be given on replies".to_string(),
            ));
        }

        message.feedback = Some(Feedback {
            is_helpful,
            comment: comment.filter(|c| !c.trim().is_empty()),
        });
        let updated = message.clone();
        self.save(&messages)?;

        tracing::info!(mode = %self.mode, message_id, is_helpful, "feedback recorded");
        Ok(updated)
    }

    /// Forget the conversation; the next load starts from the greeting.
    pub fn clear(&self) -> ScholarResult<()> {
        self.store.remove(self.mode.storage_key())
    }
}
