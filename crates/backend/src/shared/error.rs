use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_post::rules::TransitionError;
use contracts::shared::error::ApiErrorBody;
use thiserror::Error;

/// Failure of a record operation, rendered as status + `{ "message": ... }`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Transition(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("{} {}", status.as_u16(), self);
        let body = ApiErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
