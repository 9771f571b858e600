//! Calendar-day filtering of the loaded history.

use chrono::{Local, NaiveDate, TimeZone};

use crate::models::WeldingRecord;

/// Keep the records whose timestamp falls on calendar day `day` when viewed
/// in `tz`. Pure, order-preserving, and idempotent.
pub fn records_on_day<Tz: TimeZone>(
    records: &[WeldingRecord],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<WeldingRecord> {
    records
        .iter()
        .filter(|record| record.timestamp.with_timezone(tz).date_naive() == day)
        .cloned()
        .collect()
}

/// Calendar-day filter in the operator's local timezone.
pub fn records_on_local_day(records: &[WeldingRecord], day: NaiveDate) -> Vec<WeldingRecord> {
    records_on_day(records, day, &Local)
}
