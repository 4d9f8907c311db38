// tests/support/mocks/mod.rs
pub mod publishers;
pub mod repos;
pub mod time;

pub use publishers::{FailingPublisher, RecordingPublisher};
pub use repos::FlakyArticleWrite;
pub use time::{fixed_clock, fixed_now};
