use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};

use sweetshop_inventory::sort_sweets;

use crate::app::extract::{ValidForm, ValidQuery};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Listing view: optional search (name or category) and sort.
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    ValidQuery(query): ValidQuery<dto::ListQuery>,
) -> axum::response::Response {
    let sort = match query.sort() {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = services.with_inventory(|inventory| {
        let mut sweets = match query.search_term() {
            Some(term) => inventory.search(term),
            None => inventory.all(),
        };
        if let Some((key, order)) = sort {
            sort_sweets(&mut sweets, key, order);
        }
        Ok(sweets)
    });

    match result {
        Ok(sweets) => (StatusCode::OK, Json(sweets)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    ValidForm(form): ValidForm<dto::SweetForm>,
) -> axum::response::Response {
    let category = match form.category() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.with_inventory(|inventory| inventory.add(form.name, category, form.price, form.quantity)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.with_inventory(|inventory| inventory.delete(id)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Edit view: the current state of one sweet.
pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.with_inventory(|inventory| Ok(inventory.get(id)?.clone())) {
        Ok(sweet) => (StatusCode::OK, Json(sweet)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ValidForm(form): ValidForm<dto::SweetForm>,
) -> axum::response::Response {
    let id = match dto::parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let update = match form.into_update() {
        Ok(u) => u,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.with_inventory(|inventory| inventory.update(id, update)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// JSON listing of every sweet, in id order.
pub async fn api_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.with_inventory(|inventory| Ok(inventory.all())) {
        Ok(sweets) => (StatusCode::OK, Json(sweets)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
