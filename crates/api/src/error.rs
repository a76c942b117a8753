use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidBody(JsonRejection),
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge {
                limit: crate::MAX_BODY_BYTES,
            }
        } else {
            Self::InvalidBody(rejection)
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody(JsonRejection::JsonDataError(_)) => "invalid_request",
            Self::InvalidBody(JsonRejection::JsonSyntaxError(_)) => "malformed_json",
            Self::InvalidBody(JsonRejection::MissingJsonContentType(_)) => {
                "unsupported_media_type"
            }
            Self::InvalidBody(_) => "bad_request",
            Self::PayloadTooLarge { .. } => "payload_too_large",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
