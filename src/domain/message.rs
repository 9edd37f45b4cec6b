use super::{ConversationId, MessageId, SenderType};
use chrono::{DateTime, Utc};

pub const BOT_SENDER_ID: &str = "bot";

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub text: String,
    pub sender_type: SenderType,
    pub sender_id: String,
    pub sender_name: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        conversation_id: ConversationId,
        text: String,
        sender_type: SenderType,
        sender_id: String,
        sender_name: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::generate(timestamp),
            conversation_id,
            text,
            sender_type,
            sender_id,
            sender_name,
            timestamp,
        }
    }

    pub fn bot_reply(
        trigger: &Message,
        text: String,
        bot_name: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::for_reply_to(&trigger.id),
            conversation_id: trigger.conversation_id.clone(),
            text,
            sender_type: SenderType::Bot,
            sender_id: BOT_SENDER_ID.to_string(),
            sender_name: bot_name.to_string(),
            timestamp,
        }
    }
}
