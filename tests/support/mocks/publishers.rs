// tests/support/mocks/publishers.rs
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chronicle_core::application::{
    ApplicationResult, error::ApplicationError, ports::events::ArticleEventPublisher,
};
use chronicle_core::domain::{article::ArticleId, workflow::TransitionRecord};

/// Keeps every notification it receives.
#[derive(Default)]
pub struct RecordingPublisher {
    records: Mutex<Vec<(ArticleId, TransitionRecord)>>,
}

impl RecordingPublisher {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn records(&self) -> Vec<(ArticleId, TransitionRecord)> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ArticleEventPublisher for RecordingPublisher {
    async fn publish_state_changed(
        &self,
        article_id: ArticleId,
        record: &TransitionRecord,
    ) -> ApplicationResult<()> {
        self.records
            .lock()
            .unwrap()
            .push((article_id, record.clone()));
        Ok(())
    }
}

/// Refuses every notification but counts the attempts.
#[derive(Default)]
pub struct FailingPublisher {
    attempts: AtomicUsize,
}

impl FailingPublisher {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ArticleEventPublisher for FailingPublisher {
    async fn publish_state_changed(
        &self,
        _article_id: ArticleId,
        _record: &TransitionRecord,
    ) -> ApplicationResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::infrastructure("event sink unavailable"))
    }
}
