use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::history::StateHistoryEntry;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, AuthorId};
use crate::domain::errors::DomainResult;
use crate::domain::workflow::ArticleState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::Conflict` when the stored `updated_at` no
    /// longer equals `update.original_updated_at`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_published(&self, limit: u32, offset: u64) -> DomainResult<Vec<Article>>;
    async fn count_published(&self) -> DomainResult<u64>;
    async fn find_by_author(
        &self,
        author_id: &AuthorId,
        state: Option<ArticleState>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Article>>;
    /// SCHEDULED articles whose `scheduled_at` is at or before `at`, oldest first.
    async fn find_scheduled_due_by(&self, at: DateTime<Utc>) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait StateHistoryRepository: Send + Sync {
    async fn append(&self, entry: StateHistoryEntry) -> DomainResult<()>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<StateHistoryEntry>>;
}
