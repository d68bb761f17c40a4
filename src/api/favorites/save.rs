use crate::api::{ErrorResponse, OkResponse};
use crate::auth::CurrentUser;
use crate::{favorites, get_conn, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveFavoriteRequest {
    pub title: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default)]
    pub image: String,
}

fn default_link() -> String {
    "#".to_string()
}

#[utoipa::path(
    post,
    path = "/favorite",
    tag = "favorites",
    request_body = SaveFavoriteRequest,
    responses(
        (status = 200, description = "Recipe saved", body = OkResponse),
        (status = 500, description = "Save failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn save_favorite(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<SaveFavoriteRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    if let Err(e) = favorites::save(&mut conn, user.id, &req.title, &req.link, &req.image) {
        tracing::error!("Failed to save favorite: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save favorite".to_string(),
            }),
        )
            .into_response();
    }

    Json(OkResponse::ok()).into_response()
}
