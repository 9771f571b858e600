//! HTTP implementation of the record sink.
//!
//! Append: POST `{base}/api/voltage` with a camelCase JSON record body.
//! Read: GET `{base}/api/voltage/latest?limit=N` returning snake_case rows.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::models::WeldingRecord;

use super::{RecordSink, StoredRow};

#[derive(Debug, Clone)]
pub struct HttpSink {
    client: Client,
    base_url: String,
}

impl HttpSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecordSink for HttpSink {
    async fn append(&self, record: &WeldingRecord) -> Result<()> {
        let url = format!("{}/api/voltage", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .with_context(|| format!("append request to {url} failed"))?;

        response
            .error_for_status()
            .with_context(|| format!("store rejected record {}", record.id))?;
        Ok(())
    }

    async fn latest(&self, limit: usize) -> Result<Vec<StoredRow>> {
        let url = format!("{}/api/voltage/latest", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .with_context(|| format!("read request to {url} failed"))?;

        let rows = response
            .error_for_status()
            .context("store returned a non-success status for history read")?
            .json::<Vec<StoredRow>>()
            .await
            .context("malformed history payload from store")?;
        Ok(rows)
    }
}
