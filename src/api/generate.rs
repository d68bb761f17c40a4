use crate::auth::CurrentUser;
use crate::generator::{self, PantryInput, Recipe};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Ingredient list, as a JSON array or a comma-separated string.
    #[serde(default)]
    pub pantry: PantryInput,
    /// Accepted but not applied; see the generator docs.
    #[serde(default)]
    pub diet: String,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Exactly three recipe suggestions", body = [Recipe]),
        (status = 303, description = "Redirect to login when unauthenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn generate(_user: CurrentUser, Json(req): Json<GenerateRequest>) -> impl IntoResponse {
    if !req.diet.is_empty() {
        tracing::debug!(diet = %req.diet, "Diet filter requested but not applied");
    }

    Json(generator::generate(&req.pantry, &req.diet))
}
