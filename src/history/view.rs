//! History screen state: loaded records, selected day, selection, printing.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};

use crate::models::WeldingRecord;
use crate::report::{render_report, PrintSink};
use crate::sink::RecordSink;

use super::filter::records_on_local_day;
use super::selection::SelectionSet;
use super::store::{load_history, HISTORY_LIMIT};

pub struct HistoryView {
    stored_records: Vec<WeldingRecord>,
    selected_date: NaiveDate,
    selection: SelectionSet,
}

impl HistoryView {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            stored_records: Vec::new(),
            selected_date,
            selection: SelectionSet::new(),
        }
    }

    /// One-shot load when the view becomes active. Replaces the loaded set
    /// wholesale; live sampler output is never merged in.
    pub async fn load(&mut self, sink: &dyn RecordSink) {
        self.stored_records = load_history(sink, HISTORY_LIMIT).await;
        self.prune_selection();
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Change the filter day and prune selections that are no longer visible.
    pub fn set_date(&mut self, day: NaiveDate) {
        self.selected_date = day;
        self.prune_selection();
    }

    /// Records on the selected local calendar day, in store return order.
    pub fn filtered(&self) -> Vec<WeldingRecord> {
        records_on_local_day(&self.stored_records, self.selected_date)
    }

    pub fn toggle(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn toggle_all(&mut self) {
        let filtered = self.filtered();
        self.selection
            .toggle_all(filtered.iter().map(|record| record.id.as_str()));
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether the print action is enabled. Printing with an empty
    /// selection is a contract violation prevented here, not an error.
    pub fn can_print(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Render the selected records into a report and hand it to the print
    /// sink. Returns `None` without touching the sink when nothing is
    /// selected. Rows follow filtered order, not selection order.
    pub fn print_report<Tz: TimeZone>(
        &self,
        printer: &dyn PrintSink,
        rendered_at: &DateTime<Tz>,
    ) -> Result<Option<String>> {
        if !self.can_print() {
            return Ok(None);
        }

        let selected: Vec<WeldingRecord> = self
            .filtered()
            .into_iter()
            .filter(|record| self.selection.contains(&record.id))
            .collect();

        let document = render_report(&selected, self.selected_date, rendered_at);
        printer.print(&document)?;
        Ok(Some(document))
    }

    fn prune_selection(&mut self) {
        let visible = self.filtered();
        self.selection
            .retain(visible.iter().map(|record| record.id.as_str()));
    }
}
