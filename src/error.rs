use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::analysis::AnalysisError;

/// Body of every non-200 response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced by the HTTP layer.
///
/// Upstream causes are logged and never returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Ingredients text is required")]
    MissingIngredients,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Error analyzing ingredients")]
    Analysis(#[from] AnalysisError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingIngredients => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Analysis(ref e) = self {
            tracing::error!(error = %e, "Ingredient analysis failed");
            metrics::counter!("analysis_failures_total").increment(1);
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::completion::CompletionError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(AppError::MissingIngredients.status(), StatusCode::BAD_REQUEST);
        let err = AppError::from(AnalysisError::from(CompletionError::MissingContent));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_detail_not_in_message() {
        let err = AppError::from(AnalysisError::from(CompletionError::Status {
            status: 401,
            body: "invalid api key sk-123".to_string(),
        }));
        assert_eq!(err.to_string(), "Error analyzing ingredients");
    }

    #[test]
    fn test_payload_too_large_status() {
        assert_eq!(AppError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::PayloadTooLarge.to_string(), "Request body too large");
    }
}
