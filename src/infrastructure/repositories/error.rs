use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_STATE: &str = "articles_state_chk";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";
const CNT_ARTICLE_SCHEDULED_CHECK: &str = "articles_scheduled_requires_timestamp_chk";
const CNT_HISTORY_ARTICLE: &str = "article_state_history_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_HISTORY_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_ARTICLE_STATE => DomainError::validation("state", "unknown article state"),
                    CNT_ARTICLE_PUBLISHED_CHECK => DomainError::validation(
                        "published_at",
                        "published articles require published_at",
                    ),
                    CNT_ARTICLE_SCHEDULED_CHECK => DomainError::validation(
                        "scheduled_at",
                        "scheduled_at must be set exactly while scheduled",
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
