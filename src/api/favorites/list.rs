use crate::api::ErrorResponse;
use crate::auth::CurrentUser;
use crate::models::Favorite;
use crate::{favorites, get_conn, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "The caller's saved recipes", body = [Favorite]),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_favorites(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    match favorites::list(&mut conn, user.id) {
        Ok(saved) => Json(saved).into_response(),
        Err(e) => {
            tracing::error!("Failed to list favorites: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list favorites".to_string(),
                }),
            )
                .into_response()
        }
    }
}
