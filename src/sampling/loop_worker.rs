//! Fixed-interval sampling loop.
//!
//! While monitoring is active, one record per interval is derived from the
//! current live reading and handed to the sink. Appends are fire-and-forget:
//! a failure is logged and dropped, with no retry and no local buffering.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::models::WeldingRecord;
use crate::sink::RecordSink;

const APPEND_TIMEOUT_SECS: u64 = 10;

pub async fn sampling_loop(
    session_id: String,
    sink: Arc<dyn RecordSink>,
    live_rx: watch::Receiver<f64>,
    interval: Duration,
    operator: String,
    cancel_token: CancellationToken,
) {
    // First sample lands one full interval after activation, not immediately.
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let voltage = *live_rx.borrow();
                let record = WeldingRecord::from_live_reading(voltage, Utc::now(), &operator);
                let append = sink.append(&record);

                match tokio::time::timeout(Duration::from_secs(APPEND_TIMEOUT_SECS), append).await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => error!(
                        "sample append failed for session {session_id}: {err:?}"
                    ),
                    Err(_) => warn!(
                        "sample append timeout (> {APPEND_TIMEOUT_SECS}s) for session {session_id}"
                    ),
                }
            }
            _ = cancel_token.cancelled() => {
                info!("sampling loop shutting down for session {session_id}");
                break;
            }
        }
    }
}
