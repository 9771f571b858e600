//! Selection state for the history table.

use std::collections::HashSet;

/// Set of record ids the operator has marked for the report.
///
/// Callers only toggle ids that are visible in the current filtered view;
/// `retain` prunes the set whenever that view changes so stale ids never
/// linger invisibly selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`. Self-inverse.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select-all / deselect-all over the current filtered view: clears when
    /// everything is already selected, otherwise becomes exactly the
    /// filtered ids.
    pub fn toggle_all<'a>(&mut self, filtered_ids: impl IntoIterator<Item = &'a str>) {
        let filtered: Vec<&str> = filtered_ids.into_iter().collect();
        if self.ids.len() == filtered.len() {
            self.ids.clear();
        } else {
            self.ids = filtered.iter().map(|id| (*id).to_string()).collect();
        }
    }

    /// Drop every selected id that is no longer visible.
    pub fn retain<'a>(&mut self, visible_ids: impl IntoIterator<Item = &'a str>) {
        let visible: HashSet<&str> = visible_ids.into_iter().collect();
        self.ids.retain(|id| visible.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
