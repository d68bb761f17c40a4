mod api;
mod auth;
mod config;
mod content;
mod db;
mod favorites;
mod generator;
mod models;
mod pantry;
mod schema;
mod telemetry;
mod views;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use config::Config;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub struct AppContext {
    pub pool: db::DbPool,
    pub config: Config,
}

pub type AppState = Arc<AppContext>;

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let config = Config::from_env();
    let static_dir = config.static_dir.clone();
    let bind_addr = config.bind_addr.clone();

    let pool = db::create_pool(&config.database_url);
    let state: AppState = Arc::new(AppContext { pool, config });

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .route("/", get(api::home::home))
        .route("/logout", get(api::logout::logout))
        .route("/generate", post(api::generate::generate))
        .route("/tts", post(api::tts::tts))
        .route("/news", get(api::news::news))
        .route("/background", get(api::background::background))
        .merge(api::public::router())
        .merge(api::pantry::router())
        .merge(api::favorites::router())
        .merge(swagger_ui)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(middleware::from_fn(api::no_store_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at /swagger-ui/");

    axum::serve(listener, app).await.unwrap();
}
