use super::map_sqlx;
use crate::domain::article::{ArticleId, AuthorId, StateHistoryEntry, StateHistoryRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresStateHistoryRepository {
    pool: PgPool,
}

impl PostgresStateHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HistoryRow {
    article_id: Uuid,
    from_state: String,
    to_state: String,
    event: String,
    triggered_by: Option<String>,
    reason: Option<String>,
    scheduled_at: Option<DateTime<Utc>>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<HistoryRow> for StateHistoryEntry {
    type Error = DomainError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        Ok(StateHistoryEntry {
            article_id: ArticleId::from(row.article_id),
            from_state: row.from_state.parse()?,
            to_state: row.to_state.parse()?,
            event: row.event.parse()?,
            triggered_by: row.triggered_by.map(AuthorId::new).transpose()?,
            reason: row.reason,
            scheduled_at: row.scheduled_at,
            recorded_at: row.recorded_at,
        })
    }
}

#[async_trait]
impl StateHistoryRepository for PostgresStateHistoryRepository {
    async fn append(&self, entry: StateHistoryEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_state_history
                (article_id, from_state, to_state, event, triggered_by, reason, scheduled_at, recorded_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(entry.article_id.as_uuid())
        .bind(entry.from_state.as_str())
        .bind(entry.to_state.as_str())
        .bind(entry.event.as_str())
        .bind(entry.triggered_by.as_ref().map(AuthorId::as_str))
        .bind(entry.reason.as_deref())
        .bind(entry.scheduled_at)
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<StateHistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT article_id, from_state, to_state, event, triggered_by, reason, scheduled_at, recorded_at
             FROM article_state_history
             WHERE article_id = $1
             ORDER BY recorded_at ASC, id ASC",
        )
        .bind(article_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StateHistoryEntry::try_from).collect()
    }
}
