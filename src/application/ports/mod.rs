// src/application/ports/mod.rs
pub mod events;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type EventPublisherPort = dyn events::ArticleEventPublisher;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
