pub mod database;
pub mod events;
pub mod repositories;
pub mod scheduler;
pub mod time;
pub mod util;
