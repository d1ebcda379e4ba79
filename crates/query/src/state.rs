//! Per-view query state.

use serde::{Deserialize, Serialize};

/// Sort direction for a table column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Search, sort, and page state owned by a single list view.
///
/// Side-effect contract: any change to the search text or the sort key
/// resets the page to 1 (so must a change to the underlying records, via
/// [`QueryState::records_changed`]). Changing the page alone changes nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    search_text: String,
    sort: Option<(String, SortDirection)>,
    page: usize,
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            sort: None,
            page: 1,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|(field, dir)| (field.as_str(), *dir))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search text and return to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Select a sort column. Selecting the current column flips the
    /// direction; selecting a new column resets to ascending. Either way the
    /// page returns to 1.
    pub fn toggle_sort(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.sort = match self.sort.take() {
            Some((current, direction)) if current == field => {
                Some((current, direction.flipped()))
            }
            _ => Some((field, SortDirection::Asc)),
        };
        self.page = 1;
    }

    /// Move to a page. Values below 1 snap to 1; the upper clamp happens
    /// against the filtered total when the query runs.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The caller replaced or mutated the underlying records.
    pub fn records_changed(&mut self) {
        self.page = 1;
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
