// src/application/commands/articles/mod.rs
mod archive;
mod auto_publish;
mod create;
mod ownership;
mod publish;
mod schedule;
mod service;
mod transition;

pub use archive::{ArchiveArticleCommand, RestoreArticleCommand};
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use publish::{PublishArticleCommand, UnpublishArticleCommand};
pub use schedule::{ScheduleArticleCommand, UnscheduleArticleCommand};
pub use service::ArticleCommandService;
