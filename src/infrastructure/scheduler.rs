// src/infrastructure/scheduler.rs
use std::{sync::Arc, time::Duration};

use crate::application::commands::articles::ArticleCommandService;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::{error, info};

/// Runs the auto-publish sweep on a fixed interval until `shutdown` flips.
///
/// Ticks missed while a sweep is still running are skipped, so sweeps never
/// overlap within one process.
pub fn spawn_auto_publish(
    commands: Arc<ArticleCommandService>,
    every: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = every.as_secs(), "auto-publish ticker started");
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match commands.auto_publish_due(None).await {
                        Ok(published) if published > 0 => {
                            info!(published, "auto-published scheduled articles");
                        }
                        Ok(_) => {}
                        Err(err) => error!(error = %err, "auto-publish sweep failed"),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        info!("auto-publish ticker stopped");
    })
}
