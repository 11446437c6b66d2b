//! Optional background removal of expired records.
//!
//! Reads already treat expired rows as expired, so the sweeper only reclaims
//! storage early. It is off unless `EXPIRY_SWEEP_INTERVAL_SECONDS` is set.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::domain::repositories::WebUrlRepository;

/// Runs one sweep and returns the number of deleted records.
pub async fn sweep_once<R: WebUrlRepository + ?Sized>(repository: &R) -> u64 {
    match repository.delete_expired(Utc::now()).await {
        Ok(0) => {
            debug!("Expiry sweep found nothing to delete");
            0
        }
        Ok(deleted) => {
            info!(deleted, "Expiry sweep removed expired records");
            deleted
        }
        Err(e) => {
            error!("Expiry sweep failed: {}", e);
            0
        }
    }
}

/// Deletes expired records every `period`, forever.
///
/// Failures are logged and the loop carries on with the next tick.
pub async fn run_expiry_sweeper<R: WebUrlRepository + ?Sized>(repository: Arc<R>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        sweep_once(repository.as_ref()).await;
    }
}
