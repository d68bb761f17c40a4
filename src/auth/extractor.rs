use crate::models::User;
use crate::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::db::get_user;
use super::token::SessionToken;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Extractor that verifies the session cookie and provides the authenticated
/// user.
///
/// Use this in any handler that requires authentication:
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
///     // user is the authenticated User row
/// }
/// ```
pub struct CurrentUser(pub User);

/// Rejection for unauthenticated requests. Always a redirect to the login
/// page; protected routes never proceed anonymously and never surface a bare
/// error.
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let jar = CookieJar::from_request_parts(parts, &state)
            .await
            .map_err(|_| AuthRedirect)?;
        let cookie = jar.get(SESSION_COOKIE).ok_or(AuthRedirect)?;

        let claims =
            SessionToken::verify(cookie.value(), &state.config.secret_key).ok_or(AuthRedirect)?;

        // Signature checked; the account must also still exist.
        let mut conn = state.pool.get().map_err(|_| AuthRedirect)?;
        let user = get_user(&mut conn, claims.user_id).ok_or(AuthRedirect)?;

        Ok(CurrentUser(user))
    }
}
