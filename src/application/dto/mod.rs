pub mod articles;
pub mod auth;
pub mod history;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, AuthorSummaryDto};
pub use auth::Actor;
pub use history::StateHistoryDto;
pub use pagination::{OffsetPage, PageRequest};
