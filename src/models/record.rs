//! Welding measurement record model.
//!
//! Records come from two places: the sampling loop creates them from the
//! live voltage reading (`WLD_` id namespace), and the history store
//! reconstructs them from persisted rows (`DB_` id namespace). The prefix
//! keeps the two origins distinguishable after they land in the same view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed duration label attached to every sample.
pub const SAMPLE_DURATION: &str = "00:03";

/// Operator label used when the store has no operator column for a row.
pub const DEFAULT_OPERATOR: &str = "Admin";

/// Spread applied around the live reading to derive the min/max envelope.
const VOLTAGE_SPREAD: f64 = 2.0;

/// A single welding-voltage measurement.
///
/// Immutable once created. `min_voltage <= avg_voltage <= max_voltage` is
/// expected but not enforced here; constructors uphold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeldingRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub min_voltage: f64,
    pub max_voltage: f64,
    pub avg_voltage: f64,
    pub duration: String,
    pub operator: String,
}

impl WeldingRecord {
    /// Derive a record from the current live reading.
    pub fn from_live_reading(voltage: f64, now: DateTime<Utc>, operator: &str) -> Self {
        Self {
            id: format!("WLD_{}", now.timestamp_millis()),
            timestamp: now,
            min_voltage: (voltage - VOLTAGE_SPREAD).max(0.0),
            max_voltage: voltage + VOLTAGE_SPREAD,
            avg_voltage: voltage,
            duration: SAMPLE_DURATION.to_string(),
            operator: operator.to_string(),
        }
    }
}
