use super::state::{ArticleEvent, ArticleState};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot transition from {from} with event {event}: no transition defined")]
    NoTransition {
        from: ArticleState,
        event: ArticleEvent,
    },
    #[error("cannot transition from {from} with event {event}: guard condition failed")]
    GuardFailed {
        from: ArticleState,
        event: ArticleEvent,
    },
}

impl TransitionError {
    pub const fn from_state(&self) -> ArticleState {
        match self {
            Self::NoTransition { from, .. } | Self::GuardFailed { from, .. } => *from,
        }
    }

    pub const fn event(&self) -> ArticleEvent {
        match self {
            Self::NoTransition { event, .. } | Self::GuardFailed { event, .. } => *event,
        }
    }
}
