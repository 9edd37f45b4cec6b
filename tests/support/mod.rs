#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::sync::mpsc;
use tower::ServiceExt;

use chatline::application::ports::{
    Clock, ConversationRepository, RepositoryError,
};
use chatline::application::services::{BotReplyWorker, ConversationService, ResponseGenerator};
use chatline::domain::{Conversation, ConversationId, Message};
use chatline::infrastructure::persistence::InMemoryConversationRepository;
use chatline::infrastructure::time::SystemClock;
use chatline::presentation::{AppState, create_router};

pub const REPLY_DELAY: Duration = Duration::from_millis(1000);
pub const BOT_NAME: &str = "Chat Assistant";
pub const TEST_SEED: u64 = 7;

pub struct UnavailableRepository;

#[async_trait::async_trait]
impl ConversationRepository for UnavailableRepository {
    async fn create_conversation(
        &self,
        _conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    async fn get_conversation(
        &self,
        _id: &ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    async fn append_message(&self, _message: &Message) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    async fn touch_conversation(
        &self,
        _id: &ConversationId,
        _at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    async fn get_messages(
        &self,
        _conversation_id: &ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

/// Wires a service and spawns its reply worker on the current runtime.
pub fn create_service(
    repository: Arc<dyn ConversationRepository>,
    clock: Arc<dyn Clock>,
    response_generator: Arc<ResponseGenerator>,
) -> Arc<ConversationService> {
    let (reply_sender, reply_receiver) = mpsc::unbounded_channel();
    let worker = BotReplyWorker::new(
        reply_receiver,
        Arc::clone(&repository),
        response_generator,
        Arc::clone(&clock),
        BOT_NAME.to_string(),
    );
    tokio::spawn(worker.run());

    Arc::new(ConversationService::new(
        repository,
        clock,
        reply_sender,
        REPLY_DELAY,
    ))
}

pub fn create_test_app_with(
    repository: Arc<dyn ConversationRepository>,
    clock: Arc<dyn Clock>,
) -> Router {
    let response_generator = Arc::new(ResponseGenerator::with_seed(TEST_SEED));
    let conversation_service = create_service(
        repository,
        Arc::clone(&clock),
        Arc::clone(&response_generator),
    );

    create_router(AppState {
        conversation_service,
        response_generator,
        clock,
    })
}

pub fn create_test_app() -> Router {
    create_test_app_with(
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(SystemClock),
    )
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn create_conversation(app: &Router, owner: &str) -> String {
    let (status, json) = call(
        app,
        json_request(
            "POST",
            "/api/conversations",
            serde_json::json!({ "salesforceUserId": owner, "userName": "Ada" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["conversationId"].as_str().unwrap().to_string()
}

pub async fn send_message(app: &Router, conversation_id: &str, text: &str) -> String {
    let (status, json) = call(
        app,
        json_request(
            "POST",
            "/api/messages",
            serde_json::json!({ "conversationId": conversation_id, "messageText": text }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["messageId"].as_str().unwrap().to_string()
}

pub async fn get_messages(app: &Router, conversation_id: &str) -> serde_json::Value {
    let (status, json) = call(
        app,
        get_request(&format!("/api/conversations/{}/messages", conversation_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

pub fn is_iso_timestamp(value: &serde_json::Value) -> bool {
    value
        .as_str()
        .map(|s| s.ends_with('Z') && chrono::DateTime::parse_from_rfc3339(s).is_ok())
        .unwrap_or(false)
}
