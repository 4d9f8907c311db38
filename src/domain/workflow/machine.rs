// src/domain/workflow/machine.rs
use super::{
    error::TransitionError,
    state::{ArticleEvent, ArticleState},
    transitions::{available_events, find_rule},
};
use crate::domain::article::AuthorId;
use chrono::{DateTime, Utc};

/// Inputs available to guards and copied into the resulting record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionContext {
    pub triggered_by: Option<AuthorId>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub current_time: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl TransitionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triggered_by(mut self, actor: AuthorId) -> Self {
        self.triggered_by = Some(actor);
        self
    }

    pub fn scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.current_time = Some(now);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Outcome of a realized transition, handed to the event port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub event: ArticleEvent,
    pub from: ArticleState,
    pub to: ArticleState,
    pub triggered_at: DateTime<Utc>,
    /// `None` for system-triggered events.
    pub triggered_by: Option<AuthorId>,
    pub reason: Option<String>,
    /// Schedule held by the machine after the transition.
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Decides article lifecycle transitions.
///
/// A machine is rebuilt from the persisted state and schedule for every
/// decision and dropped afterwards; it performs no I/O. The only clock read is
/// the fallback used when the context carries no `current_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStateMachine {
    state: ArticleState,
    scheduled_at: Option<DateTime<Utc>>,
}

impl ArticleStateMachine {
    pub const fn new(state: ArticleState, scheduled_at: Option<DateTime<Utc>>) -> Self {
        Self {
            state,
            scheduled_at,
        }
    }

    pub const fn state(&self) -> ArticleState {
        self.state
    }

    pub const fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    /// Applies `event`. On failure the machine is left untouched.
    pub fn transition(
        &mut self,
        event: ArticleEvent,
        context: &TransitionContext,
    ) -> Result<TransitionRecord, TransitionError> {
        let from = self.state;
        let now = context.current_time.unwrap_or_else(Utc::now);
        let target = self.check(event, context, now)?;

        self.state = target;
        if event == ArticleEvent::Schedule {
            self.scheduled_at = context.scheduled_at.or(self.scheduled_at);
        }
        if from == ArticleState::Scheduled
            && matches!(event, ArticleEvent::Publish | ArticleEvent::SaveDraft)
        {
            self.scheduled_at = None;
        }

        Ok(TransitionRecord {
            event,
            from,
            to: self.state,
            triggered_at: now,
            triggered_by: context.triggered_by.clone(),
            reason: context.reason.clone(),
            scheduled_at: self.scheduled_at,
        })
    }

    pub fn can_transition(&self, event: ArticleEvent, context: &TransitionContext) -> bool {
        let now = context.current_time.unwrap_or_else(Utc::now);
        self.check(event, context, now).is_ok()
    }

    pub fn available_events(&self) -> Vec<ArticleEvent> {
        available_events(self.state)
    }

    pub const fn is_publishable(&self) -> bool {
        matches!(self.state, ArticleState::Draft | ArticleState::Scheduled)
    }

    pub const fn is_editable(&self) -> bool {
        matches!(self.state, ArticleState::Draft | ArticleState::Scheduled)
    }

    pub const fn is_published(&self) -> bool {
        matches!(self.state, ArticleState::Published)
    }

    pub fn can_auto_publish(&self, now: DateTime<Utc>) -> bool {
        self.state == ArticleState::Scheduled && self.scheduled_at.is_some_and(|at| at <= now)
    }

    // The stored schedule stands in when the context does not carry one.
    fn check(
        &self,
        event: ArticleEvent,
        context: &TransitionContext,
        now: DateTime<Utc>,
    ) -> Result<ArticleState, TransitionError> {
        let from = self.state;
        let rule = find_rule(from, event).ok_or(TransitionError::NoTransition { from, event })?;

        if let Some(guard) = rule.guard {
            let scheduled_at = context.scheduled_at.or(self.scheduled_at);
            if !guard.allows(scheduled_at, now) {
                return Err(TransitionError::GuardFailed { from, event });
            }
        }

        Ok(rule.to)
    }
}
