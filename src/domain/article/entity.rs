// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTitle, AuthorId,
};
use crate::domain::workflow::{ArticleState, ArticleStateMachine, TransitionRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub state: ArticleState,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub const fn state_machine(&self) -> ArticleStateMachine {
        ArticleStateMachine::new(self.state, self.scheduled_at)
    }

    /// Copies the outcome of a successful transition onto the entity.
    ///
    /// `scheduled_at` survives only in SCHEDULED. `published_at` is stamped
    /// when the article enters PUBLISHED and is kept afterwards.
    pub fn apply_transition(&mut self, record: &TransitionRecord, now: DateTime<Utc>) {
        self.state = record.to;
        self.scheduled_at = if record.to == ArticleState::Scheduled {
            record.scheduled_at
        } else {
            None
        };
        if record.to == ArticleState::Published && record.from != ArticleState::Published {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    /// Freshly created articles always start as undated drafts.
    pub fn into_draft(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            state: ArticleState::Draft,
            published_at: None,
            scheduled_at: None,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Lifecycle write guarded by the `updated_at` value the writer last read.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub state: ArticleState,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn lifecycle(article: &Article, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            state: article.state,
            published_at: article.published_at,
            scheduled_at: article.scheduled_at,
            original_updated_at,
            updated_at: article.updated_at,
        }
    }
}
