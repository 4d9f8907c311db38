// src/infrastructure/events.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult, error::ApplicationError, ports::events::ArticleEventPublisher,
    },
    domain::{
        article::{ArticleId, AuthorId, StateHistoryEntry, StateHistoryRepository},
        workflow::TransitionRecord,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

/// Logs each realized transition and records it in the state history.
pub struct HistoryEventPublisher {
    history: Arc<dyn StateHistoryRepository>,
}

impl HistoryEventPublisher {
    pub fn new(history: Arc<dyn StateHistoryRepository>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl ArticleEventPublisher for HistoryEventPublisher {
    async fn publish_state_changed(
        &self,
        article_id: ArticleId,
        record: &TransitionRecord,
    ) -> ApplicationResult<()> {
        info!(
            %article_id,
            event = %record.event,
            from = %record.from,
            to = %record.to,
            triggered_by = record.triggered_by.as_ref().map_or("system", AuthorId::as_str),
            triggered_at = %record.triggered_at,
            "article state changed"
        );

        self.history
            .append(StateHistoryEntry::from_record(article_id, record))
            .await
            .map_err(|err| {
                error!(%article_id, error = %err, "failed to record state history");
                ApplicationError::infrastructure(format!("state history not recorded: {err}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::{ArticleEvent, ArticleState};
    use crate::infrastructure::repositories::InMemoryStateHistoryRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn records_true_prior_state() {
        let history = Arc::new(InMemoryStateHistoryRepository::new());
        let publisher = HistoryEventPublisher::new(history.clone());
        let id = ArticleId::generate();
        let record = TransitionRecord {
            event: ArticleEvent::Publish,
            from: ArticleState::Draft,
            to: ArticleState::Published,
            triggered_at: Utc::now(),
            triggered_by: Some(AuthorId::new("alice").unwrap()),
            reason: None,
            scheduled_at: None,
        };

        publisher.publish_state_changed(id, &record).await.unwrap();

        let entries = history.list_by_article(id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].from_state, ArticleState::Draft);
        assert_eq!(entries[0].to_state, ArticleState::Published);
    }
}
