use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use super::json_body::JsonBody;
use super::responses::{ApiError, iso_timestamp};
use crate::application::services::SendMessage;
use crate::domain::{ConversationId, Message};
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

pub const STORED_IN: &str = "external_database";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub conversation_id: Option<String>,
    pub message_text: Option<String>,
    pub sender_type: Option<String>,
    pub salesforce_user_id: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub success: bool,
    pub message_id: String,
    pub stored_in: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub conversation_id: String,
    pub message_text: String,
    pub sender_type: String,
    pub salesforce_user_id: String,
    pub user_name: String,
    pub timestamp: String,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            conversation_id: message.conversation_id.to_string(),
            message_text: message.text,
            sender_type: message.sender_type.as_str().to_string(),
            salesforce_user_id: message.sender_id,
            user_name: message.sender_name,
            timestamp: iso_timestamp(message.timestamp),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessagesResponse {
    pub success: bool,
    pub conversation_id: String,
    pub messages: Vec<MessageView>,
    pub total_count: usize,
    pub timestamp: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn send_message_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    if let Some(text) = &request.message_text {
        tracing::debug!(text = %sanitize_text(text), "Processing message");
    }

    let message = state
        .conversation_service
        .send_message(SendMessage {
            conversation_id: request.conversation_id,
            text: request.message_text,
            sender_type: request.sender_type,
            sender_id: request.salesforce_user_id,
            sender_name: request.user_name,
        })
        .await
        .map_err(|e| ApiError::from_service(e, state.clock.now()))?;

    Ok(Json(SendMessageResponse {
        success: true,
        message_id: message.id.to_string(),
        stored_in: STORED_IN.to_string(),
        timestamp: iso_timestamp(state.clock.now()),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn get_messages_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<GetMessagesResponse>, ApiError> {
    let conversation_id = ConversationId::from_string(conversation_id);
    let messages: Vec<MessageView> = state
        .conversation_service
        .get_messages(&conversation_id)
        .await
        .map_err(|e| ApiError::from_service(e, state.clock.now()))?
        .into_iter()
        .map(MessageView::from)
        .collect();

    tracing::debug!(total_count = messages.len(), "Messages retrieved");

    Ok(Json(GetMessagesResponse {
        success: true,
        conversation_id: conversation_id.to_string(),
        total_count: messages.len(),
        messages,
        timestamp: iso_timestamp(state.clock.now()),
    }))
}
