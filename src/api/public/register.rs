use crate::auth::{self, RegisterError};
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[utoipa::path(
    get,
    path = "/register",
    tag = "auth",
    responses(
        (status = 200, description = "Registration form", body = String, content_type = "text/html")
    )
)]
pub async fn register_form() -> impl IntoResponse {
    Html(views::register())
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created, redirect to login"),
        (status = 400, description = "Empty or already-taken username"),
        (status = 500, description = "Account creation failed")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(c) => c,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Service unavailable").into_response()
        }
    };

    match auth::register(&mut conn, &form.username, &form.password) {
        Ok(user) => {
            tracing::info!(user_id = user.id, "New account registered");
            Redirect::to("/login").into_response()
        }
        Err(e @ (RegisterError::EmptyUsername | RegisterError::DuplicateUsername)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(RegisterError::Db(e)) => {
            tracing::error!("Failed to create user: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response()
        }
    }
}
