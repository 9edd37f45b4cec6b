use std::sync::Arc;

use crate::application::ports::Clock;
use crate::application::services::{ConversationService, ResponseGenerator};

#[derive(Clone)]
pub struct AppState {
    pub conversation_service: Arc<ConversationService>,
    pub response_generator: Arc<ResponseGenerator>,
    pub clock: Arc<dyn Clock>,
}
