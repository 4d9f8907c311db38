// src/domain/workflow/state.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleState {
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl ArticleState {
    pub const ALL: [Self; 4] = [
        Self::Draft,
        Self::Scheduled,
        Self::Published,
        Self::Archived,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Scheduled => "SCHEDULED",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ArticleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleState {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| DomainError::validation("state", format!("unknown state `{value}`")))
    }
}

/// Trigger requesting a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleEvent {
    SaveDraft,
    Schedule,
    Publish,
    Unpublish,
    Archive,
    Restore,
    /// Raised by the scheduled sweep, never by a person.
    AutoPublish,
}

impl ArticleEvent {
    pub const ALL: [Self; 7] = [
        Self::SaveDraft,
        Self::Schedule,
        Self::Publish,
        Self::Unpublish,
        Self::Archive,
        Self::Restore,
        Self::AutoPublish,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SaveDraft => "SAVE_DRAFT",
            Self::Schedule => "SCHEDULE",
            Self::Publish => "PUBLISH",
            Self::Unpublish => "UNPUBLISH",
            Self::Archive => "ARCHIVE",
            Self::Restore => "RESTORE",
            Self::AutoPublish => "AUTO_PUBLISH",
        }
    }

    /// Whether an author may raise the event through a use case.
    pub const fn is_manual(self) -> bool {
        !matches!(self, Self::AutoPublish)
    }
}

impl fmt::Display for ArticleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleEvent {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| DomainError::validation("event", format!("unknown event `{value}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_parses_case_insensitively() {
        assert_eq!("scheduled".parse::<ArticleState>().unwrap(), ArticleState::Scheduled);
        assert_eq!("ARCHIVED".parse::<ArticleState>().unwrap(), ArticleState::Archived);
        assert!("deleted".parse::<ArticleState>().is_err());
    }

    #[test]
    fn event_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&ArticleEvent::AutoPublish).unwrap();
        assert_eq!(json, "\"AUTO_PUBLISH\"");
        assert_eq!(ArticleEvent::SaveDraft.to_string(), "SAVE_DRAFT");
    }

    #[test]
    fn only_auto_publish_is_system_raised() {
        let system: Vec<_> = ArticleEvent::ALL
            .into_iter()
            .filter(|event| !event.is_manual())
            .collect();
        assert_eq!(system, [ArticleEvent::AutoPublish]);
    }
}
