use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::AuthorId;

/// Only the owning author may drive manual transitions.
pub struct IsArticleAuthorSpec<'a> {
    article: &'a Article,
    actor: &'a AuthorId,
}

impl<'a> IsArticleAuthorSpec<'a> {
    pub const fn new(article: &'a Article, actor: &'a AuthorId) -> Self {
        Self { article, actor }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.author_id == *self.actor
    }
}
