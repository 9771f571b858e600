//! Persistence seam for measurement records.
//!
//! The store is an opaque remote service with an append API and a bounded
//! read API. The trait exists so the sampling loop and the history store
//! can run against in-memory fakes in tests.

pub mod http;

pub use http::HttpSink;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::WeldingRecord;

/// One row as returned by the store's read endpoint.
///
/// The read side speaks snake_case and omits the duration/operator columns;
/// the history store fills those back in on ingest.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredRow {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub min_voltage: f64,
    pub max_voltage: f64,
    pub avg_voltage: f64,
}

#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist one record. The response body, if any, is ignored.
    async fn append(&self, record: &WeldingRecord) -> Result<()>;

    /// Fetch up to `limit` most-recent persisted rows.
    async fn latest(&self, limit: usize) -> Result<Vec<StoredRow>>;
}
