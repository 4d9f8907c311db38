// src/domain/workflow/transitions.rs
use super::state::{ArticleEvent, ArticleState};
use chrono::{DateTime, Utc};

/// Precondition attached to an otherwise legal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// A schedule is present and lies strictly after `now`.
    ScheduleInFuture,
    /// A schedule is present and is at or before `now`.
    ScheduleDue,
}

impl Guard {
    pub fn allows(self, scheduled_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match (self, scheduled_at) {
            (_, None) => false,
            (Self::ScheduleInFuture, Some(at)) => at > now,
            (Self::ScheduleDue, Some(at)) => at <= now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub to: ArticleState,
    pub guard: Option<Guard>,
}

impl Rule {
    const fn to(to: ArticleState) -> Self {
        Self { to, guard: None }
    }

    const fn guarded(to: ArticleState, guard: Guard) -> Self {
        Self {
            to,
            guard: Some(guard),
        }
    }
}

/// Looks up the rule for `(from, event)`.
///
/// Every pair is spelled out, so adding a state or an event fails to compile
/// until it has been classified here.
pub const fn find_rule(from: ArticleState, event: ArticleEvent) -> Option<Rule> {
    use ArticleEvent::{Archive, AutoPublish, Publish, Restore, SaveDraft, Schedule, Unpublish};
    use ArticleState::{Archived, Draft, Published, Scheduled};

    match (from, event) {
        (Draft, SaveDraft) => Some(Rule::to(Draft)),
        (Draft, Schedule) => Some(Rule::guarded(Scheduled, Guard::ScheduleInFuture)),
        (Draft, Publish) => Some(Rule::to(Published)),
        (Draft, Unpublish | Archive | Restore | AutoPublish) => None,

        (Scheduled, SaveDraft) => Some(Rule::to(Draft)),
        (Scheduled, Schedule) => Some(Rule::guarded(Scheduled, Guard::ScheduleInFuture)),
        (Scheduled, Publish) => Some(Rule::to(Published)),
        (Scheduled, AutoPublish) => Some(Rule::guarded(Published, Guard::ScheduleDue)),
        (Scheduled, Unpublish | Archive | Restore) => None,

        (Published, Unpublish) => Some(Rule::to(Draft)),
        (Published, Archive) => Some(Rule::to(Archived)),
        (Published, SaveDraft | Schedule | Publish | Restore | AutoPublish) => None,

        (Archived, Restore) => Some(Rule::to(Draft)),
        (Archived, SaveDraft | Schedule | Publish | Unpublish | Archive | AutoPublish) => None,
    }
}

/// Events that have a rule from `from`, in declaration order.
pub fn available_events(from: ArticleState) -> Vec<ArticleEvent> {
    ArticleEvent::ALL
        .into_iter()
        .filter(|event| find_rule(from, *event).is_some())
        .collect()
}
