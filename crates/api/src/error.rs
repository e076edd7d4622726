use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::repo_path::RepoPathError;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// The request path failed validation; reported to the caller verbatim.
    Validation {
        message: String,
        details: Vec<String>,
    },
    /// Anything unexpected; logged server-side, reported generically.
    Internal(String),
}

impl From<RepoPathError> for ApiError {
    fn from(err: RepoPathError) -> Self {
        Self::Validation {
            message: "Invalid repository format. Use owner/repo format.".to_string(),
            details: vec![err.to_string()],
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: Some(details),
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Failed to analyze repository".to_string(),
                        details: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_carries_details() {
        let err: ApiError = "not-a-path".parse::<common::RepoPath>().unwrap_err().into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid repository format. Use owner/repo format.");
        let details = body["details"].as_array().unwrap();
        assert!(!details.is_empty());
        assert!(details[0].as_str().unwrap().contains("not-a-path"));
    }

    #[tokio::test]
    async fn internal_error_hides_the_cause() {
        let response = ApiError::Internal("registry poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to analyze repository");
        assert!(body.get("details").is_none());
    }
}
