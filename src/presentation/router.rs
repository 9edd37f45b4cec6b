use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    bot_response_handler, create_conversation_handler, get_conversation_handler,
    get_messages_handler, health_handler, send_message_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/conversations", post(create_conversation_handler))
        .route(
            "/api/conversations/{conversation_id}",
            get(get_conversation_handler),
        )
        .route(
            "/api/conversations/{conversation_id}/messages",
            get(get_messages_handler),
        )
        .route("/api/messages", post(send_message_handler))
        .route("/api/chat/bot-response", post(bot_response_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
