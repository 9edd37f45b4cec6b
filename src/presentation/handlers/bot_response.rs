use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::json_body::JsonBody;
use super::responses::iso_timestamp;
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResponseRequest {
    pub conversation_id: Option<String>,
    pub user_message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResponseResponse {
    pub success: bool,
    pub bot_response: String,
    pub conversation_id: Option<String>,
    pub timestamp: String,
}

/// Preview of the canned reply. Stateless: the conversation id is echoed, not checked.
#[tracing::instrument(skip(state, request))]
pub async fn bot_response_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BotResponseRequest>,
) -> Json<BotResponseResponse> {
    let user_message = request.user_message.unwrap_or_default();
    tracing::debug!(text = %sanitize_text(&user_message), "Generating bot response preview");

    Json(BotResponseResponse {
        success: true,
        bot_response: state.response_generator.generate(&user_message),
        conversation_id: request.conversation_id,
        timestamp: iso_timestamp(state.clock.now()),
    })
}
