// src/application/commands/articles/ownership.rs
use crate::{
    application::{
        dto::Actor,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, specifications::IsArticleAuthorSpec},
};

pub(super) fn ensure_author(actor: &Actor, article: &Article) -> ApplicationResult<()> {
    if IsArticleAuthorSpec::new(article, &actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author may change this article",
        ))
    }
}
