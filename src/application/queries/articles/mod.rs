mod by_author;
mod history;
mod list_published;
mod lookup;
mod service;

pub use by_author::ListMyArticlesQuery;
pub use history::ListStateHistoryQuery;
pub use list_published::ListPublishedArticlesQuery;
pub use lookup::{GetArticleByIdQuery, GetArticleBySlugQuery};
pub use service::ArticleQueryService;
