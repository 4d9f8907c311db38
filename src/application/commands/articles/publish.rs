// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::workflow::{ArticleEvent, TransitionContext},
};

pub struct PublishArticleCommand {
    pub id: String,
}

pub struct UnpublishArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// DRAFT or SCHEDULED → PUBLISHED. Publishing a scheduled article drops
    /// its schedule.
    pub async fn publish_article(
        &self,
        actor: &Actor,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.transition_owned(actor, &command.id, ArticleEvent::Publish, TransitionContext::new())
            .await
    }

    /// PUBLISHED → DRAFT; `published_at` is kept.
    pub async fn unpublish_article(
        &self,
        actor: &Actor,
        command: UnpublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.transition_owned(
            actor,
            &command.id,
            ArticleEvent::Unpublish,
            TransitionContext::new(),
        )
        .await
    }
}
