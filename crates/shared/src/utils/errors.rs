use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::domain::{ResponseStatus, WebResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

/// Where a failure lands once classified. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub const fn status(self) -> ResponseStatus {
        match self {
            ErrorKind::Validation => ResponseStatus::BadRequest,
            ErrorKind::NotFound => ResponseStatus::NotFound,
            ErrorKind::Internal => ResponseStatus::InternalServerError,
        }
    }
}

impl AppError {
    pub fn classify(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::SqlxError(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The envelope this failure is reported as.
    ///
    /// Internal failures expose their full error text in `data`.
    pub fn to_web_response(&self) -> WebResponse<Value> {
        let kind = self.classify();

        let data = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => message.clone(),
            other => other.to_string(),
        };

        WebResponse::new(kind.status(), Value::String(data))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let response = self.to_web_response();

        match self.classify() {
            ErrorKind::Internal => error!("Request failed with internal error: {}", self),
            kind => warn!("Request rejected ({kind:?}): {}", self),
        }

        response.into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use validator::Validate;

    use crate::domain::CreateCategoryRequest;

    fn validation_error() -> AppError {
        let request = CreateCategoryRequest {
            name: String::new(),
        };

        request
            .validate()
            .expect_err("empty name must fail validation")
            .into()
    }

    #[test]
    fn classification_is_total() {
        let cases = [
            (validation_error(), ErrorKind::Validation),
            (
                AppError::BadRequest("bad body".into()),
                ErrorKind::Validation,
            ),
            (AppError::NotFound("missing".into()), ErrorKind::NotFound),
            (AppError::SqlxError(sqlx::Error::RowNotFound), ErrorKind::Internal),
            (AppError::SqlxError(sqlx::Error::PoolTimedOut), ErrorKind::Internal),
            (AppError::Internal("boom".into()), ErrorKind::Internal),
        ];

        for (err, expected) in cases {
            assert_eq!(err.classify(), expected, "{err:?}");
            assert_eq!(err.classify(), err.classify());
        }
    }

    #[test]
    fn not_found_envelope_carries_message() {
        let err = AppError::NotFound("category is not found".into());

        assert_eq!(
            serde_json::to_value(err.to_web_response()).unwrap(),
            json!({"code": 404, "status": "NOT FOUND", "data": "category is not found"})
        );
    }

    #[test]
    fn internal_envelope_carries_error_text() {
        let err = AppError::SqlxError(sqlx::Error::PoolTimedOut);
        let envelope = err.to_web_response();

        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.status, "INTERNAL SERVER ERROR");
        assert_eq!(envelope.data, Value::String(err.to_string()));
    }

    #[test]
    fn validation_envelope_is_bad_request() {
        let envelope = validation_error().to_web_response();

        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.status, "BAD REQUEST");
        assert!(
            envelope
                .data
                .as_str()
                .unwrap()
                .contains("Name must not be empty")
        );
    }

    #[test]
    fn responder_sets_transport_status() {
        let cases = [
            (validation_error(), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
