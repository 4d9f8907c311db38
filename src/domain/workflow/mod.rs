// src/domain/workflow/mod.rs
mod error;
mod machine;
mod state;
pub mod transitions;

pub use error::TransitionError;
pub use machine::{ArticleStateMachine, TransitionContext, TransitionRecord};
pub use state::{ArticleEvent, ArticleState};
