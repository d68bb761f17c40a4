pub mod login;
pub mod register;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            get(register::register_form).post(register::register),
        )
        .route("/login", get(login::login_form).post(login::login))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        login::login_form,
        login::login,
        register::register_form,
        register::register,
    ),
    components(schemas(login::LoginForm, register::RegisterForm))
)]
pub struct ApiDoc;
