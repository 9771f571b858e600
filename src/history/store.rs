//! One-shot projection of persisted records for the history view.

use log::warn;

use crate::models::{WeldingRecord, DEFAULT_OPERATOR, SAMPLE_DURATION};
use crate::sink::{RecordSink, StoredRow};

/// Page size for the bounded history read.
pub const HISTORY_LIMIT: usize = 100;

fn record_from_row(row: StoredRow) -> WeldingRecord {
    WeldingRecord {
        // Store-origin namespace keeps reloaded ids distinguishable from
        // freshly sampled ones.
        id: format!("DB_{}", row.id),
        timestamp: row.timestamp,
        min_voltage: row.min_voltage,
        max_voltage: row.max_voltage,
        avg_voltage: row.avg_voltage,
        duration: SAMPLE_DURATION.to_string(),
        operator: DEFAULT_OPERATOR.to_string(),
    }
}

/// Load up to `limit` most-recent persisted records, in store return order.
///
/// A failed or malformed response degrades to an empty history; the view
/// must be able to render with zero records, so no error reaches the caller.
pub async fn load_history(sink: &dyn RecordSink, limit: usize) -> Vec<WeldingRecord> {
    match sink.latest(limit).await {
        Ok(rows) => rows.into_iter().map(record_from_row).collect(),
        Err(err) => {
            warn!("history load failed, showing empty history: {err:?}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct FixedSink {
        rows: Vec<StoredRow>,
    }

    #[async_trait]
    impl RecordSink for FixedSink {
        async fn append(&self, _record: &WeldingRecord) -> anyhow::Result<()> {
            Ok(())
        }

        async fn latest(&self, limit: usize) -> anyhow::Result<Vec<StoredRow>> {
            Ok(self.rows.iter().take(limit).cloned().collect())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl RecordSink for FailingSink {
        async fn append(&self, _record: &WeldingRecord) -> anyhow::Result<()> {
            bail!("store unreachable")
        }

        async fn latest(&self, _limit: usize) -> anyhow::Result<Vec<StoredRow>> {
            bail!("store unreachable")
        }
    }

    fn row(id: i64, voltage: f64) -> StoredRow {
        StoredRow {
            id,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
            min_voltage: voltage - 2.0,
            max_voltage: voltage + 2.0,
            avg_voltage: voltage,
        }
    }

    #[tokio::test]
    async fn rows_map_to_records_with_store_origin_ids() {
        let sink = FixedSink {
            rows: vec![row(7, 24.0), row(8, 25.0)],
        };
        let records = load_history(&sink, HISTORY_LIMIT).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "DB_7");
        assert_eq!(records[1].id, "DB_8");
        assert_eq!(records[0].avg_voltage, 24.0);
        assert_eq!(records[0].duration, "00:03");
        assert_eq!(records[0].operator, "Admin");
    }

    #[tokio::test]
    async fn read_failure_degrades_to_empty_history() {
        let records = load_history(&FailingSink, HISTORY_LIMIT).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn load_respects_the_page_limit() {
        let rows = (0..150).map(|id| row(id, 24.0)).collect();
        let sink = FixedSink { rows };
        let records = load_history(&sink, HISTORY_LIMIT).await;
        assert_eq!(records.len(), HISTORY_LIMIT);
    }
}
