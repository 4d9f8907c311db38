// src/application/commands/articles/schedule.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::workflow::{ArticleEvent, TransitionContext},
};
use chrono::{DateTime, Utc};

pub struct ScheduleArticleCommand {
    pub id: String,
    pub scheduled_at: DateTime<Utc>,
}

pub struct UnscheduleArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// DRAFT or SCHEDULED → SCHEDULED at a strictly future instant.
    pub async fn schedule_article(
        &self,
        actor: &Actor,
        command: ScheduleArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_owned(actor, &command.id).await?;
        let now = self.clock.now();

        if command.scheduled_at <= now {
            return Err(ApplicationError::validation(
                "scheduled_at",
                "scheduled time must be in the future",
            ));
        }

        let context = TransitionContext::new()
            .triggered_by(actor.id.clone())
            .scheduled_at(command.scheduled_at)
            .at(now);
        let (saved, record) = self
            .apply_event(article, ArticleEvent::Schedule, context, now)
            .await?;
        self.notify(&saved, &record).await;
        Ok(saved.into())
    }

    /// SCHEDULED → DRAFT, abandoning the schedule.
    pub async fn unschedule_article(
        &self,
        actor: &Actor,
        command: UnscheduleArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.transition_owned(
            actor,
            &command.id,
            ArticleEvent::SaveDraft,
            TransitionContext::new().reason("schedule cancelled"),
        )
        .await
    }
}
