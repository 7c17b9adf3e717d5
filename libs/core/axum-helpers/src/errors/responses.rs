//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1500,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "item_name": [{
                "code": "length",
                "message": null,
                "params": {"max": 10, "value": "size is over 10 length"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Business Rule",
    content_type = "application/json",
    example = json!({
        "code": 1009,
        "error": "BUSINESS_RULE",
        "message": "An item with this id is already registered",
        "details": {"message_id": "ME004", "field": "id"}
    })
)]
pub struct BusinessRuleResponse(pub ErrorResponse);
