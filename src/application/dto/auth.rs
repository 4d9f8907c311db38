use crate::domain::{article::AuthorId, errors::DomainResult};

/// Caller identity as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: AuthorId,
}

impl Actor {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: AuthorId::new(id)?,
        })
    }
}
