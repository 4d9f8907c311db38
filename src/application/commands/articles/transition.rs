// src/application/commands/articles/transition.rs
use super::{ArticleCommandService, ownership::ensure_author};
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleUpdate},
        workflow::{ArticleEvent, TransitionContext, TransitionRecord},
    },
};
use chrono::{DateTime, Utc};
use tracing::error;

impl ArticleCommandService {
    pub(super) async fn load_owned(&self, actor: &Actor, id: &str) -> ApplicationResult<Article> {
        let id = ArticleId::try_parse(id)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ensure_author(actor, &article)?;
        Ok(article)
    }

    /// Decides `event` for `article`, persists the outcome and notifies the
    /// event port. Nothing is written when the machine refuses the event.
    pub(super) async fn apply_event(
        &self,
        mut article: Article,
        event: ArticleEvent,
        context: TransitionContext,
        now: DateTime<Utc>,
    ) -> ApplicationResult<(Article, TransitionRecord)> {
        let original_updated_at = article.updated_at;
        let mut machine = article.state_machine();
        let record = machine.transition(event, &context)?;

        article.apply_transition(&record, now);
        let saved = self
            .write_repo
            .update(ArticleUpdate::lifecycle(&article, original_updated_at))
            .await?;
        Ok((saved, record))
    }

    /// The state change is already stored, so a failed notification is
    /// logged and the saved article still returned.
    pub(super) async fn notify(&self, saved: &Article, record: &TransitionRecord) {
        if let Err(err) = self.events.publish_state_changed(saved.id, record).await {
            error!(
                article_id = %saved.id,
                event = %record.event,
                error = %err,
                "state change saved but notification failed"
            );
        }
    }

    pub(super) async fn transition_owned(
        &self,
        actor: &Actor,
        id: &str,
        event: ArticleEvent,
        context: TransitionContext,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_owned(actor, id).await?;
        let now = self.clock.now();
        let context = context.triggered_by(actor.id.clone()).at(now);

        let (saved, record) = self.apply_event(article, event, context, now).await?;
        self.notify(&saved, &record).await;
        Ok(saved.into())
    }
}
