use crate::api::ErrorResponse;
use crate::auth::CurrentUser;
use crate::content::headlines;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NewsResponse {
    pub headlines: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/news",
    tag = "content",
    responses(
        (status = 200, description = "Three distinct headlines", body = NewsResponse),
        (status = 500, description = "Sampling failed", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn news(_user: CurrentUser) -> impl IntoResponse {
    let mut rng = rand::rng();

    match headlines::sample(&mut rng, 3) {
        Ok(picked) => Json(NewsResponse { headlines: picked }).into_response(),
        Err(e) => {
            tracing::error!("Failed to sample headlines: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to sample headlines".to_string(),
                }),
            )
                .into_response()
        }
    }
}
