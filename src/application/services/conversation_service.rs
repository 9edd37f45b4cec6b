use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::application::ports::{Clock, ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, SenderType};

use super::bot_reply_worker::BotReplyJob;

#[derive(Debug, Default, Clone)]
pub struct CreateConversation {
    pub owner_id: Option<String>,
    pub display_name: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct SendMessage {
    pub conversation_id: Option<String>,
    pub text: Option<String>,
    pub sender_type: Option<String>,
    pub sender_id: Option<String>,
    pub sender_name: Option<String>,
}

pub struct ConversationService {
    repository: Arc<dyn ConversationRepository>,
    clock: Arc<dyn Clock>,
    reply_sender: mpsc::UnboundedSender<BotReplyJob>,
    reply_delay: Duration,
}

impl ConversationService {
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        clock: Arc<dyn Clock>,
        reply_sender: mpsc::UnboundedSender<BotReplyJob>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            reply_sender,
            reply_delay,
        }
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn create_conversation(
        &self,
        request: CreateConversation,
    ) -> Result<Conversation, ConversationServiceError> {
        let owner_id = required(request.owner_id, "salesforceUserId")?;

        let conversation = Conversation::new(
            owner_id,
            request.display_name,
            request.platform,
            self.clock.now(),
        );
        self.repository.create_conversation(&conversation).await?;

        tracing::info!(
            conversation_id = %conversation.id,
            platform = %conversation.platform,
            "Conversation created"
        );
        Ok(conversation)
    }

    pub async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Conversation, ConversationServiceError> {
        self.repository
            .get_conversation(id)
            .await?
            .ok_or_else(|| ConversationServiceError::NotFound(id.to_string()))
    }

    /// Stores a message and schedules the bot reply to it.
    /// The reply is fire-and-forget: scheduling failures are logged only.
    #[tracing::instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<Message, ConversationServiceError> {
        let conversation_id = ConversationId::from_string(required(
            request.conversation_id,
            "conversationId",
        )?);
        let text = required(request.text, "messageText")?;
        let sender_type = match non_blank(request.sender_type) {
            Some(raw) => raw
                .trim()
                .parse::<SenderType>()
                .map_err(ConversationServiceError::Validation)?,
            None => SenderType::User,
        };

        let conversation = self.get_conversation(&conversation_id).await?;

        let now = self.clock.now();
        let message = Message::new(
            conversation.id.clone(),
            text,
            sender_type,
            non_blank(request.sender_id).unwrap_or(conversation.owner_id),
            non_blank(request.sender_name).unwrap_or(conversation.display_name),
            now,
        );

        self.repository.append_message(&message).await?;
        self.repository
            .touch_conversation(&conversation.id, now)
            .await?;

        tracing::info!(
            conversation_id = %conversation.id,
            message_id = %message.id,
            sender_type = %message.sender_type,
            "Message stored"
        );

        self.schedule_reply(&message);

        Ok(message)
    }

    /// Full history sorted by timestamp. The sort is stable, so messages
    /// sharing a timestamp keep their arrival order.
    pub async fn get_messages(
        &self,
        id: &ConversationId,
    ) -> Result<Vec<Message>, ConversationServiceError> {
        let mut messages = self.repository.get_messages(id).await?;
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }

    fn schedule_reply(&self, trigger: &Message) {
        let job = BotReplyJob {
            trigger: trigger.clone(),
            due_at: Instant::now() + self.reply_delay,
        };

        if let Err(e) = self.reply_sender.send(job) {
            tracing::warn!(
                error = %e,
                message_id = %trigger.id,
                "Failed to schedule bot reply"
            );
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, ConversationServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConversationServiceError::Validation(format!(
            "{} is required",
            field
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("conversation not found: {0}")]
    NotFound(String),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ConversationServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => ConversationServiceError::NotFound(id),
            other => ConversationServiceError::Repository(other),
        }
    }
}
