use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::extract::ValidForm;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ValidForm(body): ValidForm<dto::QuantityForm>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.with_inventory(|inventory| inventory.purchase(id, body.quantity)) {
        Ok((sweet, total_cost)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "sweet": sweet,
                "quantity": body.quantity,
                "total_cost": total_cost,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn restock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ValidForm(body): ValidForm<dto::QuantityForm>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.with_inventory(|inventory| inventory.restock(id, body.quantity)) {
        Ok(sweet) => (StatusCode::OK, Json(sweet)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_price(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ValidForm(body): ValidForm<dto::PriceForm>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.with_inventory(|inventory| inventory.update_price(id, body.price)) {
        Ok(sweet) => (StatusCode::OK, Json(sweet)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
