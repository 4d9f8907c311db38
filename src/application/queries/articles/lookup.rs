use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleSlug},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Any state is visible; drafts are not hidden from readers.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        self.find_existing(&query.id).await.map(Into::into)
    }

    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(article) => Ok(article.into()),
            None => Err(ApplicationError::not_found(format!(
                "no article with slug `{slug}`"
            ))),
        }
    }

    /// Identifiers are opaque to callers: malformed text is reported the
    /// same way as an unknown id.
    pub(super) async fn find_existing(&self, raw_id: &str) -> ApplicationResult<Article> {
        let not_found =
            || ApplicationError::not_found(format!("article {} not found", raw_id.trim()));
        let id = ArticleId::try_parse(raw_id).ok_or_else(not_found)?;
        self.read_repo.find_by_id(id).await?.ok_or_else(not_found)
    }
}
