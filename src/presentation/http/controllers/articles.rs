// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArchiveArticleCommand, CreateArticleCommand, PublishArticleCommand, RestoreArticleCommand,
        ScheduleArticleCommand, UnpublishArticleCommand, UnscheduleArticleCommand,
    },
    dto::{ArticleDto, StateHistoryDto},
    error::ApplicationError,
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, ListMyArticlesQuery,
        ListPublishedArticlesQuery, ListStateHistoryQuery,
    },
};
use crate::domain::workflow::ArticleState;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Defaults to 20, capped at 100.
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MyArticlesParams {
    /// One of DRAFT, SCHEDULED, PUBLISHED, ARCHIVED.
    pub state: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScheduleArticleRequest {
    /// RFC 3339 instant, strictly in the future.
    #[serde(default, alias = "scheduledAt")]
    pub scheduled_at: String,
}

fn parse_instant(raw: &str) -> HttpResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| {
            HttpError::from_error(ApplicationError::validation(
                "scheduled_at",
                "scheduled_at must be an RFC 3339 timestamp",
            ))
        })
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses(
        (status = 200, description = "Published articles, newest first", body = ArticleListResponse),
    ),
    security([]),
    tag = "Articles"
)]
pub async fn list_published(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_published(ListPublishedArticlesQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    security([]),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
    ),
    security([]),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Draft created", body = ArticleDto),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        cover_image: payload.cover_image,
        author_id: actor.id.into_inner(),
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article published", body = ArticleDto),
        (status = 400, description = "Transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish_article(&actor, PublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/schedule",
    params(("id" = String, Path, description = "Article id (UUID)")),
    request_body = ScheduleArticleRequest,
    responses(
        (status = 200, description = "Article scheduled", body = ArticleDto),
        (status = 400, description = "Past timestamp or transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn schedule_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ScheduleArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let scheduled_at = parse_instant(&payload.scheduled_at)?;
    state
        .services
        .article_commands
        .schedule_article(&actor, ScheduleArticleCommand { id, scheduled_at })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/unschedule",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Schedule cancelled, back to draft", body = ArticleDto),
        (status = 400, description = "Transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn unschedule_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unschedule_article(&actor, UnscheduleArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/unpublish",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article back to draft", body = ArticleDto),
        (status = 400, description = "Transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unpublish_article(&actor, UnpublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/archive",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article archived", body = ArticleDto),
        (status = 400, description = "Transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn archive_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .archive_article(&actor, ArchiveArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/restore",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article restored to draft", body = ArticleDto),
        (status = 400, description = "Transition not allowed", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn restore_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .restore_article(&actor, RestoreArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/history",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Recorded transitions, oldest first", body = [StateHistoryDto]),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Workflow"
)]
pub async fn list_state_history(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<StateHistoryDto>>> {
    state
        .services
        .article_queries
        .list_state_history(&actor, ListStateHistoryQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/me/articles",
    params(MyArticlesParams),
    responses(
        (status = 200, description = "Caller's articles, newest first", body = [ArticleDto]),
        (status = 400, description = "Unknown state filter", body = ErrorResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn list_my_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<MyArticlesParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let article_state = params
        .state
        .as_deref()
        .map(str::parse::<ArticleState>)
        .transpose()
        .map_err(|err| HttpError::from_error(err.into()))?;

    state
        .services
        .article_queries
        .list_my_articles(
            &actor,
            ListMyArticlesQuery {
                state: article_state,
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()
        .map(Json)
}
