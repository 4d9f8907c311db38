use super::ArticleQueryService;
use crate::{
    application::{
        dto::{Actor, StateHistoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::IsArticleAuthorSpec,
};

pub struct ListStateHistoryQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// Recorded transitions of one article, oldest first. Author only.
    pub async fn list_state_history(
        &self,
        actor: &Actor,
        query: ListStateHistoryQuery,
    ) -> ApplicationResult<Vec<StateHistoryDto>> {
        let article = self.find_existing(&query.id).await?;
        if !IsArticleAuthorSpec::new(&article, &actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may view the history of this article",
            ));
        }

        let entries = self.history_repo.list_by_article(article.id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
