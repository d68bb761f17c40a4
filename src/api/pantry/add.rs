use crate::api::ErrorResponse;
use crate::auth::CurrentUser;
use crate::{get_conn, pantry, AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddItemForm {
    #[serde(default)]
    pub ingredient: String,
}

#[utoipa::path(
    post,
    path = "/pantry",
    tag = "pantry",
    request_body(content = AddItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Item added (or blank input ignored), redirect to the list"),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn add_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<AddItemForm>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state);

    if let Err(e) = pantry::add(&mut conn, user.id, &form.ingredient) {
        tracing::error!("Failed to add pantry item: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to add pantry item".to_string(),
            }),
        )
            .into_response();
    }

    Redirect::to("/pantry").into_response()
}
