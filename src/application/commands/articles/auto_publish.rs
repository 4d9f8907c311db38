// src/application/commands/articles/auto_publish.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::Article,
        workflow::{ArticleEvent, TransitionContext},
    },
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

impl ArticleCommandService {
    /// Publishes every SCHEDULED article whose time has come.
    ///
    /// Each article is handled on its own: a failure is logged and the sweep
    /// moves on. Returns how many articles ended up PUBLISHED. Only a failure
    /// of the initial lookup is reported as an error.
    pub async fn auto_publish_due(
        &self,
        reference_time: Option<DateTime<Utc>>,
    ) -> ApplicationResult<usize> {
        let now = reference_time.unwrap_or_else(|| self.clock.now());
        let due = self.read_repo.find_scheduled_due_by(now).await?;
        if due.is_empty() {
            debug!(reference_time = %now, "no scheduled articles due");
            return Ok(0);
        }

        let candidates = due.len();
        let mut published = 0usize;
        for article in due {
            let id = article.id;
            match self.auto_publish_one(article, now).await {
                Ok(()) => published += 1,
                Err(err) => {
                    warn!(article_id = %id, error = %err, "auto-publish failed, continuing");
                }
            }
        }

        info!(candidates, published, reference_time = %now, "auto-publish sweep finished");
        Ok(published)
    }

    async fn auto_publish_one(&self, article: Article, now: DateTime<Utc>) -> ApplicationResult<()> {
        let context = TransitionContext::new()
            .at(now)
            .reason("scheduled publication time reached");
        let (saved, record) = self
            .apply_event(article, ArticleEvent::AutoPublish, context, now)
            .await?;
        self.notify(&saved, &record).await;
        Ok(())
    }
}
