use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::sink::RecordSink;

use super::loop_worker::sampling_loop;

/// Owns the sampling task for the active session.
///
/// The loop is an explicitly held, cancellable task rather than an ambient
/// timer: `stop` cancels the token and joins the handle, so no tick can
/// fire after it returns.
pub struct SamplingController {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl SamplingController {
    pub fn new() -> Self {
        Self {
            handle: None,
            cancel_token: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(
        &mut self,
        session_id: String,
        sink: Arc<dyn RecordSink>,
        live_rx: watch::Receiver<f64>,
        interval: Duration,
        operator: String,
    ) -> Result<()> {
        if self.handle.is_some() {
            bail!("sampling already active");
        }

        info!("starting sampling loop for session {session_id}");

        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();

        let handle = tokio::spawn(sampling_loop(
            session_id,
            sink,
            live_rx,
            interval,
            operator,
            token_clone,
        ));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("sampling loop task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }
}

impl Default for SamplingController {
    fn default() -> Self {
        Self::new()
    }
}
