//! Public API types

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::elevenlabs::SpeechError;
use crate::openai::CompletionError;

// Errors

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request couldn't be understood
    #[error("{0}")]
    BadRequest(String),
    /// One of the AI providers failed or returned something unusable
    #[error(transparent)]
    Upstream(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self);

        (self.status(), format!("Something went wrong: {}", self)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        Self::Upstream(err.into())
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        Self::Upstream(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod session {
    pub use crate::api::routes::session::public::*;
}

pub mod speak {
    pub use crate::api::routes::speak::public::*;
}
