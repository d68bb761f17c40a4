use crate::auth::CurrentUser;
use crate::views;
use axum::response::{Html, IntoResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Home page for the signed-in user", body = String, content_type = "text/html"),
        (status = 303, description = "Redirect to login when unauthenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn home(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Html(views::home(&user.username))
}
