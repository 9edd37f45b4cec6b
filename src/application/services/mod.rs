mod bot_reply_worker;
mod conversation_service;
mod response_generator;

pub use bot_reply_worker::{BotReplyError, BotReplyJob, BotReplyWorker};
pub use conversation_service::{
    ConversationService, ConversationServiceError, CreateConversation, SendMessage,
};
pub use response_generator::ResponseGenerator;
