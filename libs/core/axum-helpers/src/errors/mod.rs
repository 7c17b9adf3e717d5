pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1009,
///   "error": "BUSINESS_RULE",
///   "message": "Aggregate price for this item name has reached the limit",
///   "details": { "message_id": "ME001", "field": null }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details (validation field errors, business message ids)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// A domain rule rejected the request. `field` is set when the rule is
    /// tied to one input field, and left empty for form-level rejections.
    #[error("Business rule {message_id}: {message}")]
    BusinessRule {
        message_id: String,
        field: Option<String>,
        message: String,
    },

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    e.status(),
                    ErrorResponse::new(ErrorCode::JsonExtraction, e.body_text()),
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::InvalidQuery, e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::ValidationError,
                        ErrorCode::ValidationError.default_message(),
                    )
                    .with_details(validation_details(&e)),
                )
            }
            AppError::BusinessRule {
                message_id,
                field,
                message,
            } => {
                tracing::info!(
                    error_code = ErrorCode::BusinessRule.code(),
                    %message_id,
                    field = field.as_deref().unwrap_or("-"),
                    "Business rule rejected request"
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new(ErrorCode::BusinessRule, message).with_details(
                        serde_json::json!({ "message_id": message_id, "field": field }),
                    ),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                // Internal details stay in the log.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::InternalError,
                        ErrorCode::InternalError.default_message(),
                    ),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(ErrorCode::ServiceUnavailable, msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens validator output into `{ field: [{code, message, params}] }`.
///
/// Struct-level (cross-field) checks are reported under their own error code
/// instead of validator's `__all__` key, so clients can bind them by name.
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let mut details = serde_json::Map::new();

    for (field, errors) in errors.field_errors() {
        for err in errors {
            let key = if field == STRUCT_LEVEL_KEY {
                err.code.to_string()
            } else {
                field.to_string()
            };
            let entry = serde_json::json!({
                "code": err.code,
                "message": err.message,
                "params": err.params,
            });

            match details
                .entry(key)
                .or_insert_with(|| serde_json::Value::Array(Vec::new()))
            {
                serde_json::Value::Array(entries) => entries.push(entry),
                other => *other = serde_json::Value::Array(vec![entry]),
            }
        }
    }

    serde_json::Value::Object(details)
}

/// Key validator uses for errors raised by `#[validate(schema(..))]` functions
const STRUCT_LEVEL_KEY: &str = "__all__";

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::ValidationError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_business_rule_maps_to_422_with_message_id() {
        let response = AppError::BusinessRule {
            message_id: "ME004".to_string(),
            field: Some("id".to_string()),
            message: "duplicate".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "BUSINESS_RULE");
        assert_eq!(body["details"]["message_id"], "ME004");
        assert_eq!(body["details"]["field"], "id");
    }

    #[tokio::test]
    async fn test_global_business_rule_has_null_field() {
        let response = AppError::BusinessRule {
            message_id: "ME003".to_string(),
            field: None,
            message: "nothing found".to_string(),
        }
        .into_response();

        let body = body_json(response).await;
        assert!(body["details"]["field"].is_null());
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("item_name", ValidationError::new("length"));

        let response = AppError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 1001);
        assert_eq!(body["details"]["item_name"][0]["code"], "length");
    }

    #[test]
    fn test_struct_level_errors_are_keyed_by_code() {
        let mut errors = ValidationErrors::new();
        errors.add("__all__", ValidationError::new("stationery_price"));
        errors.add("price", ValidationError::new("range"));

        let details = validation_details(&errors);

        assert_eq!(details["stationery_price"][0]["code"], "stationery_price");
        assert_eq!(details["price"][0]["code"], "range");
        assert!(details.get("__all__").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response =
            AppError::InternalServerError("connection reset by peer".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], ErrorCode::InternalError.default_message());
    }
}
