// src/presentation/http/controllers/cron.rs
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CronAuthorized;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AutoPublishResponse {
    /// Articles moved from SCHEDULED to PUBLISHED by this sweep.
    pub published: usize,
}

#[utoipa::path(
    post,
    path = "/api/v1/cron/auto-publish",
    responses(
        (status = 200, description = "Sweep finished", body = AutoPublishResponse),
        (status = 401, description = "Missing or wrong cron key", body = ErrorResponse),
        (status = 500, description = "Due articles could not be loaded", body = ErrorResponse),
    ),
    security(("cronKey" = [])),
    tag = "System"
)]
pub async fn auto_publish(
    Extension(state): Extension<HttpState>,
    _cron: CronAuthorized,
) -> HttpResult<Json<AutoPublishResponse>> {
    state
        .services
        .article_commands
        .auto_publish_due(None)
        .await
        .into_http()
        .map(|published| Json(AutoPublishResponse { published }))
}
