pub mod entity;
pub mod history;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use history::StateHistoryEntry;
pub use repository::{ArticleReadRepository, ArticleWriteRepository, StateHistoryRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle, AuthorId};
