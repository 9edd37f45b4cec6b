use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::Instrument;

use crate::application::ports::{Clock, ConversationRepository, RepositoryError};
use crate::domain::{Message, MessageId};

use super::ResponseGenerator;

/// A bot reply waiting for its deadline.
#[derive(Debug, Clone)]
pub struct BotReplyJob {
    pub trigger: Message,
    pub due_at: Instant,
}

/// Owns deferred bot replies.
///
/// Jobs are handled in FIFO order. With a constant reply delay the deadlines
/// never decrease, so each reply fires at its own deadline.
pub struct BotReplyWorker {
    receiver: mpsc::UnboundedReceiver<BotReplyJob>,
    repository: Arc<dyn ConversationRepository>,
    response_generator: Arc<ResponseGenerator>,
    clock: Arc<dyn Clock>,
    bot_name: String,
}

impl BotReplyWorker {
    pub fn new(
        receiver: mpsc::UnboundedReceiver<BotReplyJob>,
        repository: Arc<dyn ConversationRepository>,
        response_generator: Arc<ResponseGenerator>,
        clock: Arc<dyn Clock>,
        bot_name: String,
    ) -> Self {
        Self {
            receiver,
            repository,
            response_generator,
            clock,
            bot_name,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(bot_name = %self.bot_name, "Bot reply worker started");
        while let Some(job) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "bot_reply",
                conversation_id = %job.trigger.conversation_id,
                trigger_id = %job.trigger.id,
            );
            self.handle(job).instrument(span).await;
        }
        tracing::info!("Bot reply worker stopped: channel closed");
    }

    async fn handle(&self, job: BotReplyJob) {
        tokio::time::sleep_until(job.due_at).await;

        match self.process_job(&job).await {
            Ok(reply_id) => tracing::debug!(reply_id = %reply_id, "Bot reply stored"),
            Err(e) => tracing::error!(error = %e, "Bot reply failed"),
        }
    }

    async fn process_job(&self, job: &BotReplyJob) -> Result<MessageId, BotReplyError> {
        let text = self.response_generator.generate(&job.trigger.text);
        // Never stamp the reply earlier than its trigger.
        let timestamp = self.clock.now().max(job.trigger.timestamp);
        let reply = Message::bot_reply(&job.trigger, text, &self.bot_name, timestamp);

        self.repository
            .append_message(&reply)
            .await
            .map_err(BotReplyError::Repository)?;

        Ok(reply.id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BotReplyError {
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
