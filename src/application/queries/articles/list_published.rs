use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, OffsetPage, PageRequest},
    error::ApplicationResult,
};

pub struct ListPublishedArticlesQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl ArticleQueryService {
    /// Newest publications first.
    pub async fn list_published(
        &self,
        query: ListPublishedArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let page = PageRequest::normalized(query.limit, query.offset);
        let records = self
            .read_repo
            .find_published(page.limit, page.offset)
            .await?;
        let total = self.read_repo.count_published().await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, total, page))
    }
}
