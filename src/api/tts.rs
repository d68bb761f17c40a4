use crate::auth::CurrentUser;
use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TtsResponse {
    pub text: String,
}

/// Echoes the text back. Speech synthesis happens client-side; this endpoint
/// only confirms what will be spoken.
#[utoipa::path(
    post,
    path = "/tts",
    tag = "content",
    request_body = TtsRequest,
    responses(
        (status = 200, description = "Echoed text", body = TtsResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn tts(_user: CurrentUser, Json(req): Json<TtsRequest>) -> impl IntoResponse {
    Json(TtsResponse { text: req.text })
}
