use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of statuses an envelope may carry.
///
/// Each variant owns both its HTTP status code and its label, so an envelope
/// built from a `ResponseStatus` always has a body `code` equal to the status
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
    Unauthorized,
    MethodNotAllowed,
}

impl ResponseStatus {
    pub const fn status_code(self) -> StatusCode {
        match self {
            ResponseStatus::Ok => StatusCode::OK,
            ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
            ResponseStatus::NotFound => StatusCode::NOT_FOUND,
            ResponseStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ResponseStatus::Unauthorized => StatusCode::UNAUTHORIZED,
            ResponseStatus::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::BadRequest => "BAD REQUEST",
            ResponseStatus::NotFound => "NOT FOUND",
            ResponseStatus::InternalServerError => "INTERNAL SERVER ERROR",
            ResponseStatus::Unauthorized => "UNAUTHORIZED",
            ResponseStatus::MethodNotAllowed => "METHOD NOT ALLOWED",
        }
    }
}

/// `{"code": .., "status": .., "data": ..}`, the body of every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(status: ResponseStatus, data: T) -> Self {
        Self {
            code: status.status_code().as_u16(),
            status: status.label().to_string(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(ResponseStatus::Ok, data)
    }

    /// Builds an envelope without checking that `code` and `status` agree.
    pub fn from_parts(code: u16, status: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: status.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        match StatusCode::from_u16(self.code) {
            Ok(status) => (status, Json(self)).into_response(),
            Err(_) => WebResponse::new(
                ResponseStatus::InternalServerError,
                format!("invalid status code {}", self.code),
            )
            .into_response(),
        }
    }
}
