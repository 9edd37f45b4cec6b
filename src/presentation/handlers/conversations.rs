use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::json_body::JsonBody;
use super::responses::{ApiError, iso_timestamp};
use crate::application::services::CreateConversation;
use crate::domain::{Conversation, ConversationId};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub salesforce_user_id: Option<String>,
    pub user_name: Option<String>,
    pub platform: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationResponse {
    pub success: bool,
    pub conversation_id: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: String,
    pub salesforce_user_id: String,
    pub user_name: String,
    pub platform: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Conversation> for ConversationView {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.to_string(),
            salesforce_user_id: conversation.owner_id,
            user_name: conversation.display_name,
            platform: conversation.platform,
            status: conversation.status.as_str().to_string(),
            created_at: iso_timestamp(conversation.created_at),
            updated_at: iso_timestamp(conversation.updated_at),
        }
    }
}

#[derive(Serialize)]
pub struct GetConversationResponse {
    pub success: bool,
    pub conversation: ConversationView,
    pub timestamp: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_conversation_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateConversationRequest>,
) -> Result<(StatusCode, Json<CreateConversationResponse>), ApiError> {
    let conversation = state
        .conversation_service
        .create_conversation(CreateConversation {
            owner_id: request.salesforce_user_id,
            display_name: request.user_name,
            platform: request.platform,
        })
        .await
        .map_err(|e| ApiError::from_service(e, state.clock.now()))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateConversationResponse {
            success: true,
            conversation_id: conversation.id.to_string(),
            message: "Conversation created successfully".to_string(),
            timestamp: iso_timestamp(state.clock.now()),
        }),
    ))
}

#[tracing::instrument(skip(state))]
pub async fn get_conversation_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<GetConversationResponse>, ApiError> {
    let conversation = state
        .conversation_service
        .get_conversation(&ConversationId::from_string(conversation_id))
        .await
        .map_err(|e| ApiError::from_service(e, state.clock.now()))?;

    Ok(Json(GetConversationResponse {
        success: true,
        conversation: conversation.into(),
        timestamp: iso_timestamp(state.clock.now()),
    }))
}
