//! Row selection state owned by the grid.

use std::collections::BTreeSet;

use statements_core::Section;

/// Set of selected rows, keyed by series code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: BTreeSet<String>,
}

impl RowSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the row is selected.
    #[must_use]
    pub fn is_selected(&self, series_code: &str) -> bool {
        self.selected.contains(series_code)
    }

    /// Flips the row's selection. Returns the new state.
    pub fn toggle(&mut self, series_code: &str) -> bool {
        if self.selected.remove(series_code) {
            false
        } else {
            self.selected.insert(series_code.to_string());
            true
        }
    }

    /// Selects every row of the sections.
    pub fn select_all(&mut self, sections: &[Section]) {
        self.selected.extend(
            sections
                .iter()
                .flat_map(Section::series_codes)
                .map(str::to_string),
        );
    }

    /// Returns true if every row of the sections is selected and there is at
    /// least one row.
    #[must_use]
    pub fn all_selected(&self, sections: &[Section]) -> bool {
        let mut codes = sections.iter().flat_map(Section::series_codes).peekable();
        codes.peek().is_some() && codes.all(|code| self.is_selected(code))
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns the number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the selected series codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statements_core::GroupedSeries;

    fn section(codes: &[&str]) -> Section {
        Section::new(
            "Income Statement",
            codes
                .iter()
                .map(|c| GroupedSeries {
                    series_code: (*c).to_string(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_toggle() {
        let mut selection = RowSelection::new();
        assert!(selection.toggle("A"));
        assert!(selection.is_selected("A"));
        assert!(!selection.toggle("A"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_and_clear() {
        let sections = vec![section(&["A", "B"]), section(&["C"])];
        let mut selection = RowSelection::new();
        assert!(!selection.all_selected(&sections));
        selection.select_all(&sections);
        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(&sections));
        selection.clear();
        assert!(!selection.all_selected(&sections));
    }

    #[test]
    fn test_all_selected_needs_rows() {
        let selection = RowSelection::new();
        assert!(!selection.all_selected(&[section(&[])]));
    }
}
