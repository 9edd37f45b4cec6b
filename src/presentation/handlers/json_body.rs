use axum::Json;
use axum::extract::{FromRef, FromRequest, Request};
use serde::de::DeserializeOwned;

use super::responses::{ApiError, ApiErrorKind};
use crate::presentation::state::AppState;

/// `Json` body whose rejections (bad syntax, wrong field types, missing
/// content type) surface as a 400 `ApiError` instead of axum's plain-text body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Request body rejected");
                Err(ApiError::new(
                    ApiErrorKind::BadRequest(rejection.body_text()),
                    AppState::from_ref(state).clock.now(),
                ))
            }
        }
    }
}
