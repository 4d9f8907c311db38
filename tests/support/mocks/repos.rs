// tests/support/mocks/repos.rs
use std::{collections::HashSet, sync::Arc};

use chronicle_core::domain::{
    article::{Article, ArticleId, ArticleUpdate, ArticleWriteRepository, NewArticle},
    errors::{DomainError, DomainResult},
};
use chronicle_core::infrastructure::repositories::InMemoryArticleRepository;

/// Delegates to an in-memory store but fails updates for selected articles.
pub struct FlakyArticleWrite {
    inner: Arc<InMemoryArticleRepository>,
    failing: HashSet<ArticleId>,
}

impl FlakyArticleWrite {
    pub fn new(inner: Arc<InMemoryArticleRepository>, failing: impl IntoIterator<Item = ArticleId>) -> Self {
        Self {
            inner,
            failing: failing.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl ArticleWriteRepository for FlakyArticleWrite {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inner.insert(article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if self.failing.contains(&update.id) {
            return Err(DomainError::Persistence("storage unavailable".into()));
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
