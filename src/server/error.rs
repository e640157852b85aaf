//! HTTP error responses

use crate::utils::error::TubegrabError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Text,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    kind: BodyKind,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    /// Map a proxy failure for `/api/info`; bodies are `{"error": ...}`
    pub fn info(err: TubegrabError) -> Self {
        Self::classify(err, BodyKind::Json, "Failed to fetch video info")
    }

    /// Map a proxy failure for `/api/download`; bodies are plain text
    pub fn download(err: TubegrabError) -> Self {
        Self::classify(err, BodyKind::Text, "Failed to download video")
    }

    pub fn internal(kind: BodyKind, message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            kind,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The upstream reason is logged here and never sent to the client.
    fn classify(err: TubegrabError, kind: BodyKind, server_message: &'static str) -> Self {
        let (status, message) = match &err {
            TubegrabError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "Invalid URL"),
            TubegrabError::FormatNotFound(_) => (StatusCode::BAD_REQUEST, "Format not found"),
            _ => {
                error!("{}: {:#}", server_message, err);
                (StatusCode::INTERNAL_SERVER_ERROR, server_message)
            }
        };
        Self {
            status,
            message,
            kind,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.kind {
            BodyKind::Json => (
                self.status,
                Json(ErrorBody {
                    error: self.message,
                }),
            )
                .into_response(),
            BodyKind::Text => (self.status, self.message).into_response(),
        }
    }
}
