use crate::domain::{
    article::Article,
    workflow::{ArticleEvent, ArticleState},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummaryDto {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    #[schema(value_type = String, example = "DRAFT")]
    pub state: ArticleState,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub author: AuthorSummaryDto,
    /// Events an author can raise from the current state.
    #[schema(value_type = Vec<String>)]
    pub available_events: Vec<ArticleEvent>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let available_events = article
            .state_machine()
            .available_events()
            .into_iter()
            .filter(|event| event.is_manual())
            .collect();
        Self {
            id: article.id.to_string(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt,
            cover_image: article.cover_image,
            state: article.state,
            published_at: article.published_at,
            scheduled_at: article.scheduled_at,
            author: AuthorSummaryDto {
                id: article.author_id.into_inner(),
            },
            available_events,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
