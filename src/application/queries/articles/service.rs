use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, StateHistoryRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) history_repo: Arc<dyn StateHistoryRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        history_repo: Arc<dyn StateHistoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            history_repo,
        }
    }
}
