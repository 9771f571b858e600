//! Core of the SMAW welding-voltage monitoring system.
//!
//! While monitoring is on, a sampling loop derives one measurement per
//! interval from the live reading and appends it to a remote store. The
//! history side loads a bounded page of persisted records, filters them by
//! calendar day, tracks the operator's selection, and renders the selected
//! subset into a fixed-layout printable report.

pub mod history;
pub mod models;
pub mod monitor;
pub mod report;
pub mod sampling;
pub mod settings;
pub mod sink;

pub use history::{records_on_day, records_on_local_day, HistoryView, SelectionSet};
pub use models::{Session, WeldingRecord};
pub use monitor::{MonitorController, MonitorStatus};
pub use report::{render_report, LogPrinter, PrintSink};
pub use sampling::SamplingController;
pub use settings::{MonitorSettings, SettingsStore};
pub use sink::{HttpSink, RecordSink, StoredRow};
