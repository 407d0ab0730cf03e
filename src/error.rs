use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced by the API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied a missing or out-of-range parameter. Raised before the
    /// store is touched.
    #[error("{0}")]
    Validation(String),

    /// Store or seed feed failure. Only `message` reaches the client.
    #[error("{message}")]
    Service {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// For use with `map_err`: wraps a backend failure under a client-facing message.
    pub fn service(message: &'static str) -> impl FnOnce(anyhow::Error) -> AppError {
        move |cause| AppError::Service { message, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Service { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Service { message, cause } = &self {
            error!(error = %format!("{cause:#}"), "{message}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
