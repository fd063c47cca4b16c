//! HTTP error mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use calldata_crypto::BenchError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("Benchmark task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Stable error identifier placed in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingField { .. } => "MissingField",
            ApiError::MalformedBody(_) => "MalformedBody",
            ApiError::PayloadTooLarge(_) => "PayloadTooLarge",
            ApiError::Bench(BenchError::EncryptionCapacityExceeded { .. }) => {
                "EncryptionCapacityExceeded"
            }
            ApiError::Bench(_) | ApiError::Join(_) => "InternalCryptoFailure",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField { .. } | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Bench(e) if e.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Bench(_) | ApiError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Only the body-limit rejection carries 413; every other failure to
        // read or parse the body is the client's malformed input.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::MalformedBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), "request failed: {}", self);
        } else {
            warn!(kind = self.kind(), "request rejected: {}", self);
        }

        let mut body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        if let ApiError::Bench(e) = &self {
            if let Some(algorithm) = e.algorithm() {
                body["algorithm"] = json!(algorithm.as_str());
            }
        }

        (status, Json(body)).into_response()
    }
}
