//! Glue between the session machine, the live feed, and the sampling task.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use log::info;
use tokio::sync::{watch, Mutex};

use crate::sampling::SamplingController;
use crate::sink::RecordSink;

use super::state::MonitorState;

#[derive(Clone)]
pub struct MonitorController {
    state: Arc<Mutex<MonitorState>>,
    sampling: Arc<Mutex<SamplingController>>,
    sink: Arc<dyn RecordSink>,
    live_tx: Arc<watch::Sender<f64>>,
    sample_interval: Duration,
    operator: String,
}

impl MonitorController {
    pub fn new(
        sink: Arc<dyn RecordSink>,
        sample_interval: Duration,
        operator: impl Into<String>,
    ) -> Self {
        let (live_tx, _live_rx) = watch::channel(0.0);
        Self {
            state: Arc::new(Mutex::new(MonitorState::new())),
            sampling: Arc::new(Mutex::new(SamplingController::new())),
            sink,
            live_tx: Arc::new(live_tx),
            sample_interval,
            operator: operator.into(),
        }
    }

    /// Push the current live voltage reading into the feed the sampler reads.
    pub fn set_live_voltage(&self, voltage: f64) {
        self.live_tx.send_replace(voltage);
    }

    /// Turn monitoring on: open a session and start the sampling loop.
    /// A no-op when monitoring is already active, so repeated "on" signals
    /// cannot double-schedule ticks.
    pub async fn set_system_on(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        let Some(session) = state.begin(Utc::now()) else {
            return Ok(());
        };
        let session_id = session.id.clone();
        info!("monitoring on, opened session {session_id}");

        self.sampling.lock().await.start(
            session_id,
            Arc::clone(&self.sink),
            self.live_tx.subscribe(),
            self.sample_interval,
            self.operator.clone(),
        )
    }

    /// Turn monitoring off: cancel the sampling loop (no tick fires after
    /// this returns) and close the session. In-flight appends are not
    /// cancelled; their results are ignored.
    pub async fn set_system_off(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if !state.is_active() {
            return Ok(());
        }

        self.sampling.lock().await.stop().await?;
        if let Some(session) = state.end() {
            info!("monitoring off, closed session {}", session.id);
        }
        Ok(())
    }

    pub async fn is_active(&self) -> bool {
        self.state.lock().await.is_active()
    }

    pub async fn session_id(&self) -> Option<String> {
        self.state.lock().await.session_id().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    use crate::models::WeldingRecord;
    use crate::sink::StoredRow;

    struct CollectingSink {
        appended: StdMutex<Vec<WeldingRecord>>,
    }

    impl CollectingSink {
        fn new() -> Self {
            Self {
                appended: StdMutex::new(Vec::new()),
            }
        }

        fn count(&self) -> usize {
            self.appended.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RecordSink for CollectingSink {
        async fn append(&self, record: &WeldingRecord) -> Result<()> {
            self.appended.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn latest(&self, _limit: usize) -> Result<Vec<StoredRow>> {
            Ok(Vec::new())
        }
    }

    async fn advance_secs(total: u64) {
        // Let freshly spawned tasks take their first poll at the current
        // virtual time, so their timers anchor before the clock moves.
        tokio::task::yield_now().await;
        for _ in 0..total {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
    }

    fn controller_with_sink() -> (MonitorController, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let controller = MonitorController::new(
            Arc::clone(&sink) as Arc<dyn RecordSink>,
            Duration::from_secs(3),
            "Admin",
        );
        (controller, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn on_off_cycle_opens_and_closes_a_session() {
        let (controller, sink) = controller_with_sink();
        assert!(!controller.is_active().await);

        controller.set_system_on().await.unwrap();
        assert!(controller.is_active().await);
        let token = controller.session_id().await.unwrap();
        assert!(token.starts_with("SESSION_"));

        controller.set_live_voltage(24.0);
        advance_secs(6).await;
        assert_eq!(sink.count(), 2);

        controller.set_system_off().await.unwrap();
        assert!(!controller.is_active().await);
        assert!(controller.session_id().await.is_none());

        advance_secs(30).await;
        assert_eq!(sink.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_on_keeps_the_original_session() {
        let (controller, sink) = controller_with_sink();
        controller.set_system_on().await.unwrap();
        let token = controller.session_id().await.unwrap();

        controller.set_system_on().await.unwrap();
        assert_eq!(controller.session_id().await.unwrap(), token);

        // Still a single loop: one record per interval, not two.
        controller.set_live_voltage(24.0);
        advance_secs(3).await;
        assert_eq!(sink.count(), 1);

        controller.set_system_off().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn off_while_inactive_is_a_no_op() {
        let (controller, _sink) = controller_with_sink();
        controller.set_system_off().await.unwrap();
        assert!(!controller.is_active().await);
    }
}
