// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slugifies `title` and appends the creation instant in milliseconds.
    ///
    /// The suffix makes collisions practically impossible; an existing slug is
    /// still reported as a conflict rather than silently renamed.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            "article".to_string()
        } else {
            base
        };

        let slug = ArticleSlug::new(format!("{base}-{}", now.timestamp_millis()))?;
        if self.read_repo.find_by_slug(&slug).await?.is_some() {
            return Err(DomainError::Conflict(format!("slug `{slug}` already exists")));
        }
        Ok(slug)
    }
}
