use axum::{
    routing::{get, post},
    Router,
};

pub mod items;
pub mod reports;
pub mod stock;
pub mod system;

/// Router for every inventory endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(items::list_items))
        .route("/add", post(items::add_item))
        .route("/delete/:id", post(items::delete_item))
        .route("/edit/:id", get(items::get_item).post(items::edit_item))
        .route("/purchase/:id", post(stock::purchase))
        .route("/restock/:id", post(stock::restock))
        .route("/price/:id", post(stock::update_price))
        .route("/api/items", get(items::api_items))
        .route("/api/report", get(reports::inventory_report))
}
