// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, cron},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-cron-key"),
        ])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route(
            "/api/v1/articles",
            get(articles::list_published).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/v1/articles/{id}", get(articles::get_article))
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route(
            "/api/v1/articles/{id}/schedule",
            post(articles::schedule_article),
        )
        .route(
            "/api/v1/articles/{id}/unschedule",
            post(articles::unschedule_article),
        )
        .route(
            "/api/v1/articles/{id}/unpublish",
            post(articles::unpublish_article),
        )
        .route(
            "/api/v1/articles/{id}/archive",
            post(articles::archive_article),
        )
        .route(
            "/api/v1/articles/{id}/restore",
            post(articles::restore_article),
        )
        .route(
            "/api/v1/articles/{id}/history",
            get(articles::list_state_history),
        )
        .route("/api/v1/me/articles", get(articles::list_my_articles))
        .route("/api/v1/cron/auto-publish", post(cron::auto_publish))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
