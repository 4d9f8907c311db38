// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Shared secret expected in `X-Cron-Key`; `None` leaves the sweep open.
    pub cron_key: Option<Arc<str>>,
    pub allowed_origins: Arc<[String]>,
}
