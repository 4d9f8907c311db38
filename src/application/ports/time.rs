// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for use cases; injected so decisions stay reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
