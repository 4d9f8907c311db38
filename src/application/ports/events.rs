use crate::application::ApplicationResult;
use crate::domain::{article::ArticleId, workflow::TransitionRecord};
use async_trait::async_trait;

/// Receives every realized transition, after the article has been persisted.
#[async_trait]
pub trait ArticleEventPublisher: Send + Sync {
    async fn publish_state_changed(
        &self,
        article_id: ArticleId,
        record: &TransitionRecord,
    ) -> ApplicationResult<()>;
}
