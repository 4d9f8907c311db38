use super::ArticleQueryService;
use crate::{
    application::{
        dto::{Actor, ArticleDto, PageRequest},
        error::ApplicationResult,
    },
    domain::workflow::ArticleState,
};

pub struct ListMyArticlesQuery {
    pub state: Option<ArticleState>,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl ArticleQueryService {
    /// The caller's own articles in any state, most recently created first.
    pub async fn list_my_articles(
        &self,
        actor: &Actor,
        query: ListMyArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let page = PageRequest::normalized(query.limit, query.offset);
        let records = self
            .read_repo
            .find_by_author(&actor.id, query.state, page.limit, page.offset)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
