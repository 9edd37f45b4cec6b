use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::application::services::ConversationServiceError;

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiErrorKind {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal server error")]
    Internal,
}

/// Error surface of the HTTP API, stamped by the request's clock.
/// Internal details are logged, not returned.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, timestamp: DateTime<Utc>) -> Self {
        Self { kind, timestamp }
    }

    pub fn from_service(error: ConversationServiceError, timestamp: DateTime<Utc>) -> Self {
        let kind = match error {
            ConversationServiceError::Validation(reason) => ApiErrorKind::BadRequest(reason),
            ConversationServiceError::NotFound(_) => {
                ApiErrorKind::NotFound("Conversation not found".to_string())
            }
            ConversationServiceError::Repository(e) => {
                tracing::error!(error = %e, "Request failed on repository error");
                ApiErrorKind::Internal
            }
        };
        Self::new(kind, timestamp)
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
                timestamp: iso_timestamp(self.timestamp),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_utc_instant_when_formatting_then_uses_millis_and_z_suffix() {
        let at = DateTime::from_timestamp_millis(1_714_564_800_007).unwrap();
        assert_eq!(iso_timestamp(at), "2024-05-01T12:00:00.007Z");
    }

    #[test]
    fn given_service_errors_when_converting_then_maps_status() {
        let at = Utc::now();
        let bad = ApiError::from_service(
            ConversationServiceError::Validation("x is required".into()),
            at,
        );
        let missing =
            ApiError::from_service(ConversationServiceError::NotFound("conv_1".into()), at);

        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn given_stamped_error_when_rendering_then_body_carries_its_timestamp() {
        let at = DateTime::from_timestamp_millis(1_714_564_800_000).unwrap();
        let error = ApiError::new(ApiErrorKind::BadRequest("bad body".into()), at);

        assert_eq!(error.to_string(), "bad body");
        assert_eq!(iso_timestamp(error.timestamp), "2024-05-01T12:00:00.000Z");
    }
}
