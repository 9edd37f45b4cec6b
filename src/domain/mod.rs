mod conversation;
mod conversation_id;
mod conversation_status;
mod message;
mod message_id;
mod reply_category;
mod sender_type;

pub use conversation::{Conversation, DEFAULT_DISPLAY_NAME, DEFAULT_PLATFORM};
pub use conversation_id::ConversationId;
pub use conversation_status::ConversationStatus;
pub use message::{BOT_SENDER_ID, Message};
pub use message_id::MessageId;
pub use reply_category::ReplyCategory;
pub use sender_type::SenderType;
