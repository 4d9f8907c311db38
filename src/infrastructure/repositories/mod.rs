// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_history;

pub use error::map_sqlx;
pub use memory::{InMemoryArticleRepository, InMemoryStateHistoryRepository};
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_history::PostgresStateHistoryRepository;
