use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message};

#[derive(Default)]
struct StoreState {
    conversations: HashMap<ConversationId, Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
}

/// Process-local store. A single lock guards both maps so they never disagree.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    state: RwLock<StoreState>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    #[instrument(skip(self, conversation), fields(conversation_id = %conversation.id))]
    async fn create_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;

        if state.conversations.contains_key(&conversation.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "conversation {} already exists",
                conversation.id
            )));
        }

        state
            .conversations
            .insert(conversation.id.clone(), conversation.clone());
        state.messages.insert(conversation.id.clone(), Vec::new());

        Ok(())
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.state.read().await.conversations.get(id).cloned())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id, conversation_id = %message.conversation_id))]
    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;

        match state.messages.get_mut(&message.conversation_id) {
            Some(messages) => {
                messages.push(message.clone());
                Ok(())
            }
            None => Err(RepositoryError::NotFound(message.conversation_id.to_string())),
        }
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn touch_conversation(
        &self,
        id: &ConversationId,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;

        match state.conversations.get_mut(id) {
            Some(conversation) => {
                conversation.touch(at);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn get_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        self.state
            .read()
            .await
            .messages
            .get(conversation_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(conversation_id.to_string()))
    }
}
