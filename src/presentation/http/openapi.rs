// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, OffsetPage};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_next: bool,
}

impl From<OffsetPage<ArticleDto>> for ArticleListResponse {
    fn from(page: OffsetPage<ArticleDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
            has_next: page.has_next,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_published,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::schedule_article,
        crate::presentation::http::controllers::articles::unschedule_article,
        crate::presentation::http::controllers::articles::unpublish_article,
        crate::presentation::http::controllers::articles::archive_article,
        crate::presentation::http::controllers::articles::restore_article,
        crate::presentation::http::controllers::articles::list_state_history,
        crate::presentation::http::controllers::articles::list_my_articles,
        crate::presentation::http::controllers::cron::auto_publish,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::ScheduleArticleRequest,
            crate::presentation::http::controllers::cron::AutoPublishResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::AuthorSummaryDto,
            crate::application::dto::StateHistoryDto
        )
    ),
    tags(
        (name = "Articles", description = "Article authoring and reading"),
        (name = "Workflow", description = "Lifecycle transitions and their history"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("userId" = [])),
    info(
        title = "Chronicle API",
        description = "Article publication workflow with scheduled publishing",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "userId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-User-Id"))),
        );
        components.add_security_scheme(
            "cronKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Cron-Key"))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_workflow_paths_and_schemes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/articles",
            "/api/v1/articles/{id}/publish",
            "/api/v1/articles/{id}/schedule",
            "/api/v1/articles/{id}/history",
            "/api/v1/cron/auto-publish",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }

        let schemes = &doc.components.expect("components").security_schemes;
        assert!(schemes.contains_key("userId"));
        assert!(schemes.contains_key("cronKey"));
    }
}
