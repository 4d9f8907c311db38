// src/infrastructure/repositories/memory.rs
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate, ArticleWriteRepository,
    AuthorId, NewArticle, StateHistoryEntry, StateHistoryRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workflow::ArticleState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local article store used when no database is configured.
///
/// Enforces the same slug uniqueness and optimistic `updated_at` check as the
/// Postgres adapter.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn window(articles: Vec<Article>, limit: u32, offset: u64) -> Vec<Article> {
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    articles.into_iter().skip(skip).take(take).collect()
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.write().await;
        if articles.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if articles.contains_key(&article.id) {
            return Err(DomainError::Conflict("article id already exists".into()));
        }

        let draft = article.into_draft();
        articles.insert(draft.id, draft.clone());
        Ok(draft)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.write().await;
        let stored = articles
            .get_mut(&update.id)
            .filter(|a| a.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        stored.state = update.state;
        stored.published_at = update.published_at;
        stored.scheduled_at = update.scheduled_at;
        stored.updated_at = update.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .read()
            .await
            .values()
            .find(|a| a.slug == *slug)
            .cloned())
    }

    async fn find_published(&self, limit: u32, offset: u64) -> DomainResult<Vec<Article>> {
        let mut published: Vec<Article> = self
            .articles
            .read()
            .await
            .values()
            .filter(|a| a.state == ArticleState::Published)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(window(published, limit, offset))
    }

    async fn count_published(&self) -> DomainResult<u64> {
        let count = self
            .articles
            .read()
            .await
            .values()
            .filter(|a| a.state == ArticleState::Published)
            .count();
        Ok(count as u64)
    }

    async fn find_by_author(
        &self,
        author_id: &AuthorId,
        state: Option<ArticleState>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Article>> {
        let mut owned: Vec<Article> = self
            .articles
            .read()
            .await
            .values()
            .filter(|a| a.author_id == *author_id)
            .filter(|a| state.is_none_or(|s| a.state == s))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(window(owned, limit, offset))
    }

    async fn find_scheduled_due_by(&self, at: DateTime<Utc>) -> DomainResult<Vec<Article>> {
        let mut due: Vec<Article> = self
            .articles
            .read()
            .await
            .values()
            .filter(|a| a.state == ArticleState::Scheduled)
            .filter(|a| a.scheduled_at.is_some_and(|s| s <= at))
            .cloned()
            .collect();
        due.sort_by_key(|a| a.scheduled_at);
        Ok(due)
    }
}

#[derive(Default)]
pub struct InMemoryStateHistoryRepository {
    entries: RwLock<Vec<StateHistoryEntry>>,
}

impl InMemoryStateHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateHistoryRepository for InMemoryStateHistoryRepository {
    async fn append(&self, entry: StateHistoryEntry) -> DomainResult<()> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<StateHistoryEntry>> {
        let mut entries: Vec<StateHistoryEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.article_id == article_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.recorded_at);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleTitle};
    use chrono::Duration;

    fn new_article(slug: &str) -> NewArticle {
        NewArticle {
            id: ArticleId::generate(),
            title: ArticleTitle::new("Title").unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new("Body").unwrap(),
            excerpt: None,
            cover_image: None,
            author_id: AuthorId::new("alice").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let repo = InMemoryArticleRepository::new();
        repo.insert(new_article("same")).await.unwrap();
        let err = repo.insert(new_article("same")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn stale_update_is_rejected() {
        let repo = InMemoryArticleRepository::new();
        let article = repo.insert(new_article("a")).await.unwrap();
        let original = article.updated_at;

        let mut first = article.clone();
        first.state = ArticleState::Published;
        first.published_at = Some(original + Duration::seconds(1));
        first.updated_at = original + Duration::seconds(1);
        repo.update(ArticleUpdate::lifecycle(&first, original))
            .await
            .unwrap();

        let mut second = article;
        second.state = ArticleState::Archived;
        second.updated_at = original + Duration::seconds(2);
        let err = repo
            .update(ArticleUpdate::lifecycle(&second, original))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let stored = repo.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(stored.state, ArticleState::Published);
    }
}
