use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sweetshop_core::DomainError;
use sweetshop_inventory::InventoryError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Inventory(InventoryError::Domain(e)) => domain_error_to_response(e),
        ServiceError::Inventory(InventoryError::Store(e)) => {
            tracing::error!(error = %e, "record store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
        ServiceError::Poisoned => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "inventory unavailable",
        ),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Duplicate(_) => StatusCode::CONFLICT,
        DomainError::InsufficientStock { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
