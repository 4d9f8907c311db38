use crate::domain::article::value_objects::{ArticleId, AuthorId};
use crate::domain::workflow::{ArticleEvent, ArticleState, TransitionRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateHistoryEntry {
    pub article_id: ArticleId,
    pub from_state: ArticleState,
    pub to_state: ArticleState,
    pub event: ArticleEvent,
    pub triggered_by: Option<AuthorId>,
    pub reason: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub recorded_at: DateTime<Utc>,
}

impl StateHistoryEntry {
    pub fn from_record(article_id: ArticleId, record: &TransitionRecord) -> Self {
        Self {
            article_id,
            from_state: record.from,
            to_state: record.to,
            event: record.event,
            triggered_by: record.triggered_by.clone(),
            reason: record.reason.clone(),
            scheduled_at: record.scheduled_at,
            recorded_at: record.triggered_at,
        }
    }
}
