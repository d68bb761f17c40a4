use crate::auth::CurrentUser;
use crate::content::background;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BackgroundResponse {
    pub url: String,
}

#[utoipa::path(
    get,
    path = "/background",
    tag = "content",
    responses(
        (status = 200, description = "URL of a randomly chosen background image", body = BackgroundResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn background(_user: CurrentUser, State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = rand::rng();
    let url = background::pick(&state.config.backgrounds_dir(), &mut rng);
    Json(BackgroundResponse { url })
}
