use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::messages::MessageId;

/// Failures reported by an [`ItemRepository`](crate::repository::ItemRepository)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store already holds a row with the same unique key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// An expected, user-facing rejection.
///
/// `field` names the input the message belongs to; `None` means the message
/// applies to the request as a whole.
#[derive(Debug, Error)]
#[error("{message_id}: {}", .message_id.message())]
pub struct BusinessError {
    message_id: MessageId,
    field: Option<&'static str>,
    #[source]
    source: Option<StoreError>,
}

impl BusinessError {
    pub fn global(message_id: MessageId) -> Self {
        Self {
            message_id,
            field: None,
            source: None,
        }
    }

    pub fn field(message_id: MessageId, field: &'static str) -> Self {
        Self {
            message_id,
            field: Some(field),
            source: None,
        }
    }

    pub fn with_source(mut self, source: StoreError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    pub fn field_name(&self) -> Option<&'static str> {
        self.field
    }

    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }

    pub fn store_error(&self) -> Option<&StoreError> {
        self.source.as_ref()
    }
}

#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// Unexpected store failure; never shown to users verbatim
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ItemError {
    pub fn message_id(&self) -> Option<MessageId> {
        match self {
            ItemError::Business(err) => Some(err.message_id()),
            ItemError::Store(_) => None,
        }
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Business(err) => AppError::BusinessRule {
                message_id: err.message_id().to_string(),
                field: err.field_name().map(str::to_string),
                message: err.message_id().message().to_string(),
            },
            ItemError::Store(StoreError::Unavailable(msg)) => AppError::ServiceUnavailable(msg),
            ItemError::Store(err) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::error::Error as _;

    #[test]
    fn test_field_error_keeps_store_cause() {
        let err = BusinessError::field(MessageId::Me004, "id")
            .with_source(StoreError::DuplicateKey("item id 13".to_string()));

        assert_eq!(err.field_name(), Some("id"));
        assert!(!err.is_global());
        assert!(err.source().unwrap().to_string().contains("item id 13"));
        assert!(err.to_string().starts_with("ME004"));
    }

    #[test]
    fn test_business_error_maps_to_business_rule() {
        let app: AppError = ItemError::from(BusinessError::global(MessageId::Me003)).into();
        match app {
            AppError::BusinessRule {
                message_id, field, ..
            } => {
                assert_eq!(message_id, "ME003");
                assert_eq!(field, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_store_errors_are_server_side() {
        let unavailable = ItemError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let duplicate = ItemError::from(StoreError::DuplicateKey("x".to_string()));
        assert_eq!(duplicate.message_id(), None);
        assert_eq!(
            duplicate.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
