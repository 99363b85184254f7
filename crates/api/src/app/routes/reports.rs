use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::extract::ValidQuery;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Total value, low-stock lines and per-category totals.
pub async fn inventory_report(
    Extension(services): Extension<Arc<AppServices>>,
    ValidQuery(query): ValidQuery<dto::ReportQuery>,
) -> axum::response::Response {
    match services.with_inventory(|inventory| Ok(inventory.report(query.threshold))) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
