use crate::domain::{
    article::StateHistoryEntry,
    workflow::{ArticleEvent, ArticleState},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateHistoryDto {
    #[schema(value_type = String)]
    pub from_state: ArticleState,
    #[schema(value_type = String)]
    pub to_state: ArticleState,
    #[schema(value_type = String)]
    pub event: ArticleEvent,
    /// Absent for transitions raised by the scheduler.
    pub triggered_by: Option<String>,
    pub reason: Option<String>,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub recorded_at: DateTime<Utc>,
}

impl From<StateHistoryEntry> for StateHistoryDto {
    fn from(entry: StateHistoryEntry) -> Self {
        Self {
            from_state: entry.from_state,
            to_state: entry.to_state,
            event: entry.event,
            triggered_by: entry.triggered_by.map(|id| id.into_inner()),
            reason: entry.reason,
            scheduled_at: entry.scheduled_at,
            recorded_at: entry.recorded_at,
        }
    }
}
