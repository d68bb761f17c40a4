use crate::api::{ErrorResponse, OkResponse};
use crate::auth::CurrentUser;
use crate::pantry::DeleteError;
use crate::{get_conn, pantry, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/pantry/delete/{item_id}",
    tag = "pantry",
    params(
        ("item_id" = i32, Path, description = "Pantry item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = OkResponse),
        (status = 403, description = "Item belongs to another user", body = ErrorResponse),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    match pantry::delete(&mut conn, user.id, item_id) {
        Ok(()) => Json(OkResponse::ok()).into_response(),
        Err(e @ DeleteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e @ DeleteError::Forbidden) => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(DeleteError::Db(e)) => {
            tracing::error!("Failed to delete pantry item: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete pantry item".to_string(),
                }),
            )
                .into_response()
        }
    }
}
