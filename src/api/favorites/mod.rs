pub mod list;
pub mod save;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the favorites endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorite", post(save::save_favorite))
        .route("/favorites", get(list::list_favorites))
}

#[derive(OpenApi)]
#[openapi(
    paths(save::save_favorite, list::list_favorites),
    components(schemas(save::SaveFavoriteRequest, crate::models::Favorite))
)]
pub struct ApiDoc;
