use crate::domain::{Conversation, ConversationId, Message};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RepositoryError;

/// Storage for conversations and their append-only message sequences.
///
/// Every method is atomic with respect to the others. Implementations must
/// reject appends to unknown conversations with [`RepositoryError::NotFound`].
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Inserts the conversation together with an empty message sequence.
    async fn create_conversation(&self, conversation: &Conversation)
    -> Result<(), RepositoryError>;

    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError>;

    async fn touch_conversation(
        &self,
        id: &ConversationId,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// Messages in arrival order.
    async fn get_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>, RepositoryError>;
}
