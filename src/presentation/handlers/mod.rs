mod bot_response;
mod conversations;
mod health;
mod json_body;
mod messages;
mod responses;

pub use bot_response::bot_response_handler;
pub use conversations::{create_conversation_handler, get_conversation_handler};
pub use health::{HEALTH_MESSAGE, health_handler};
pub use json_body::JsonBody;
pub use messages::{STORED_IN, get_messages_handler, send_message_handler};
pub use responses::{ApiError, ApiErrorKind, ErrorResponse, iso_timestamp};
