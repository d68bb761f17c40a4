use crate::auth::{verify_credentials, AuthFailure, SessionToken, SESSION_COOKIE};
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login form", body = String, content_type = "text/html")
    )
)]
pub async fn login_form() -> impl IntoResponse {
    Html(views::login(None))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to home"),
        (status = 200, description = "Form re-rendered with an error message", body = String, content_type = "text/html")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let username = form.username.trim();

    // Empty fields, unknown username, and wrong password each get their own
    // message; merging them is deliberately avoided here.
    if username.is_empty() || form.password.is_empty() {
        return Html(views::login(Some("Please enter both username and password")))
            .into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(c) => c,
        Err(_) => {
            return Html(views::login(Some("Service unavailable, please try again")))
                .into_response()
        }
    };

    let user = match verify_credentials(&mut conn, username, &form.password) {
        Ok(user) => user,
        Err(failure @ (AuthFailure::UsernameNotFound | AuthFailure::WrongPassword)) => {
            return Html(views::login(Some(&failure.to_string()))).into_response();
        }
        Err(AuthFailure::Db(e)) => {
            tracing::error!("Login lookup failed: {e}");
            return Html(views::login(Some("Service unavailable, please try again")))
                .into_response();
        }
    };

    let token = SessionToken::new(user.id, &user.username).sign(&state.config.secret_key);
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), Redirect::to("/")).into_response()
}
