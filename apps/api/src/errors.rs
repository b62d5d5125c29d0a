use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::EditError;
use crate::session::SessionError;
use crate::suggestion::MergeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Stale target: {0}")]
    StaleTarget(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::InvalidIndex { .. } => AppError::InvalidIndex(e.to_string()),
            EditError::FieldTypeMismatch { .. } => AppError::Validation(e.to_string()),
        }
    }
}

impl From<MergeError> for AppError {
    fn from(e: MergeError) -> Self {
        match e {
            MergeError::StaleTarget(_) => AppError::StaleTarget(e.to_string()),
            MergeError::NotReady => AppError::Conflict(e.to_string()),
            MergeError::InvalidTarget(_) => AppError::Validation(e.to_string()),
            MergeError::Edit(inner) => inner.into(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Edit(inner) => inner.into(),
            SessionError::Merge(inner) => inner.into(),
            SessionError::Closed => AppError::Internal(anyhow::anyhow!(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidIndex(msg) => (StatusCode::NOT_FOUND, "INVALID_INDEX", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::StaleTarget(msg) => {
                tracing::warn!("Stale suggestion target: {msg}");
                (StatusCode::CONFLICT, "STALE_TARGET", msg.clone())
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{EntryId, Section};

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                EditError::InvalidIndex {
                    section: Section::Work,
                    index: 3,
                    len: 1,
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (
                EditError::FieldTypeMismatch {
                    expected: "flag",
                    got: "text",
                }
                .into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                MergeError::StaleTarget(EntryId::new()).into(),
                StatusCode::CONFLICT,
            ),
            (MergeError::NotReady.into(), StatusCode::CONFLICT),
            (
                MergeError::InvalidTarget("x".to_string()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                SessionError::Closed.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
