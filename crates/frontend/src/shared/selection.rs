//! Multi-row selection state shared by all management tables.

use std::collections::HashSet;

/// Tracks which rows of one table instance are currently checked.
///
/// The id list always mirrors the rows on screen. `sync_ids` invalidates the
/// checked set whenever the id *contents* change (order-insensitive), not
/// merely the length, so the selection can never reference rows that are no
/// longer displayed after a page change or filter.
///
/// Pure in-memory state; no backend calls. Created per table mount, stored
/// in an `RwSignal`, discarded on unmount.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<String>,
    selected: HashSet<String>,
}

impl SelectionSet {
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            selected: HashSet::new(),
        }
    }

    /// Replace the id list with the rows of a freshly loaded page. Resets
    /// the checked set to empty if the new list differs from the current one
    /// as a set.
    pub fn sync_ids(&mut self, ids: Vec<String>) {
        if !same_contents(&self.ids, &ids) {
            self.selected.clear();
        }
        self.ids = ids;
    }

    /// Check one row. Idempotent; ignored when the id is not part of the
    /// current row list.
    pub fn select_one(&mut self, id: &str) {
        if self.ids.iter().any(|known| known == id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Uncheck one row. Idempotent; no-op when absent.
    pub fn deselect_one(&mut self, id: &str) {
        self.selected.remove(id);
    }

    /// Check every row of the current list.
    pub fn select_all(&mut self) {
        self.selected = self.ids.iter().cloned().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_any(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected_all(&self) -> bool {
        !self.ids.is_empty() && self.selected.len() == self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

fn same_contents(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let known: HashSet<&str> = a.iter().map(String::as_str).collect();
    b.iter().all(|id| known.contains(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn select_all_matches_id_set() {
        let mut sel = SelectionSet::new(ids(&["a", "b", "c"]));
        sel.select_all();
        let expected: HashSet<String> = ids(&["a", "b", "c"]).into_iter().collect();
        assert_eq!(sel.selected(), &expected);
        assert!(sel.selected_all());
    }

    #[test]
    fn deselect_all_empties_the_set() {
        let mut sel = SelectionSet::new(ids(&["a", "b"]));
        sel.select_all();
        sel.deselect_all();
        assert!(sel.selected().is_empty());
        assert!(!sel.selected_any());
    }

    #[test]
    fn select_one_is_idempotent_and_bounded() {
        let mut sel = SelectionSet::new(ids(&["a", "b", "c"]));
        sel.select_one("b");
        sel.select_one("b");
        assert_eq!(sel.selected().len(), 1);
        assert!(sel.is_selected("b"));
        assert!(sel.selected_any());
        assert!(!sel.selected_all());

        // Unknown ids are ignored rather than stored.
        sel.select_one("z");
        assert!(!sel.is_selected("z"));
    }

    #[test]
    fn deselect_one_is_a_noop_when_absent() {
        let mut sel = SelectionSet::new(ids(&["a"]));
        sel.deselect_one("a");
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn selected_all_is_false_for_empty_id_list() {
        let mut sel = SelectionSet::new(Vec::new());
        sel.select_all();
        assert!(!sel.selected_all());
    }

    #[test]
    fn length_change_resets_selection() {
        let mut sel = SelectionSet::new(ids(&["a", "b"]));
        sel.select_all();
        assert!(sel.selected_all());

        // Even though "a" and "b" survive, a longer list is a content change.
        sel.sync_ids(ids(&["a", "b", "c"]));
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn content_change_with_same_length_resets_selection() {
        let mut sel = SelectionSet::new(ids(&["a", "b"]));
        sel.select_one("a");
        sel.sync_ids(ids(&["a", "x"]));
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn identical_contents_preserve_selection() {
        let mut sel = SelectionSet::new(ids(&["a", "b"]));
        sel.select_one("a");
        // Same set, different order: not an invalidation.
        sel.sync_ids(ids(&["b", "a"]));
        assert!(sel.is_selected("a"));
    }
}
