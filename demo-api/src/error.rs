use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use demo_data::DataError;
use serde::Serialize;

/// A field-level validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Errors surfaced to HTTP callers.
///
/// Every variant renders as `{ "detail": ... }`: a message string, or the
/// list of [`FieldError`]s for validation failures.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Storage(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Validation(errors) => serde_json::json!(errors),
            ApiError::NotFound(msg) => serde_json::json!(msg),
            ApiError::Storage(msg) | ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                serde_json::json!(msg)
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            ApiError::Validation(errors) => write!(f, "Validation Error: {} errors", errors.len()),
            ApiError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            ApiError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::Store(e) => ApiError::Storage(e.to_string()),
            mapping @ DataError::Mapping(_) => ApiError::Internal(mapping.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data",
            JsonRejection::JsonSyntaxError(_) => "json_syntax",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body",
        };
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text(), code)])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("path", rejection.body_text(), "path")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_detail_string() {
        let (status, body) = render(ApiError::NotFound("Item not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "detail": "Item not found" }));
    }

    #[tokio::test]
    async fn validation_renders_field_list() {
        let err = ApiError::Validation(vec![FieldError::new("name", "too long", "validation")]);
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "name");
        assert_eq!(body["detail"][0]["message"], "too long");
    }

    #[tokio::test]
    async fn storage_renders_500() {
        let (status, body) = render(ApiError::Storage("disk full".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "disk full");
    }

    #[test]
    fn data_errors_are_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let err = ApiError::from(DataError::store(io));
        assert!(matches!(&err, ApiError::Storage(msg) if msg == "gone"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(DataError::mapping("bad row"));
        assert!(matches!(&err, ApiError::Internal(msg) if msg == "Mapping error: bad row"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
