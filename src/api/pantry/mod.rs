pub mod add;
pub mod delete;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the pantry endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pantry", get(list::list_pantry).post(add::add_item))
        .route("/pantry/delete/{item_id}", post(delete::delete_item))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_pantry, add::add_item, delete::delete_item),
    components(schemas(add::AddItemForm, crate::models::PantryItem))
)]
pub struct ApiDoc;
