use crate::api::ErrorResponse;
use crate::auth::CurrentUser;
use crate::models::PantryItem;
use crate::{get_conn, pantry, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/pantry",
    tag = "pantry",
    responses(
        (status = 200, description = "The caller's pantry items", body = [PantryItem]),
        (status = 303, description = "Redirect to login when unauthenticated"),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_pantry(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    match pantry::list(&mut conn, user.id) {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            tracing::error!("Failed to list pantry: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list pantry".to_string(),
                }),
            )
                .into_response()
        }
    }
}
