// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use chronicle_core::domain::article::*;
use chronicle_core::domain::workflow::ArticleState;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    title: String,
    slug: Option<String>,
    author_id: String,
    state: ArticleState,
    scheduled_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            slug: None,
            author_id: "alice".into(),
            state: ArticleState::Draft,
            scheduled_at: None,
            published_at: None,
            created_at: fixed_now() - Duration::days(1),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn scheduled(mut self, at: DateTime<Utc>) -> Self {
        self.state = ArticleState::Scheduled;
        self.scheduled_at = Some(at);
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.state = ArticleState::Published;
        self.published_at = Some(at);
        self
    }

    pub fn archived(mut self, published_at: DateTime<Utc>) -> Self {
        self.state = ArticleState::Archived;
        self.published_at = Some(published_at);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        let id = ArticleId::generate();
        let slug = self
            .slug
            .unwrap_or_else(|| format!("test-article-{}", id.as_uuid().simple()));
        let mut article = NewArticle {
            id,
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new("Test body").unwrap(),
            excerpt: None,
            cover_image: None,
            author_id: AuthorId::new(self.author_id).unwrap(),
            created_at: self.created_at,
        }
        .into_draft();
        article.state = self.state;
        article.scheduled_at = self.scheduled_at;
        article.published_at = self.published_at;
        article
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
