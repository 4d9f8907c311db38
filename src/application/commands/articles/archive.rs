use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::workflow::{ArticleEvent, TransitionContext},
};

pub struct ArchiveArticleCommand {
    pub id: String,
}

pub struct RestoreArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn archive_article(
        &self,
        actor: &Actor,
        command: ArchiveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.transition_owned(actor, &command.id, ArticleEvent::Archive, TransitionContext::new())
            .await
    }

    pub async fn restore_article(
        &self,
        actor: &Actor,
        command: RestoreArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.transition_owned(actor, &command.id, ArticleEvent::Restore, TransitionContext::new())
            .await
    }
}
