//! Search, sort, and pagination over record collections.

use std::cmp::Ordering;

use serde_json::Value;

use cephas_core::Record;

use crate::state::{QueryState, SortDirection};

/// A searchable/sortable column of a list view, addressed by record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    field: String,
}

impl Column {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// One visible page plus the totals the pager renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Record>,
    pub total_count: usize,
    pub total_pages: usize,
    /// The effective (clamped) page index, 1-based.
    pub page: usize,
}

/// Run the full pipeline: search, then sort, then paginate.
///
/// An empty result set still renders as one empty page (`total_pages == 1`);
/// "no rows" is a valid outcome, never an error.
pub fn apply(
    records: &[Record],
    columns: &[Column],
    state: &QueryState,
    page_size: usize,
) -> TablePage {
    let page_size = page_size.max(1);

    let mut rows = filtered(records, columns, state.search_text());

    if let Some((field, direction)) = state.sort() {
        sort_rows(&mut rows, field, direction);
    }

    let total_count = rows.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = state.page().clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let rows = if start < total_count {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    TablePage {
        rows,
        total_count,
        total_pages,
        page,
    }
}

/// The filtered (not paginated) set.
///
/// Bulk operations such as select-all work on this set, never on the visible
/// page alone.
pub fn filtered(records: &[Record], columns: &[Column], search_text: &str) -> Vec<Record> {
    if search_text.is_empty() {
        return records.to_vec();
    }

    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| {
            columns.iter().any(|column| {
                nullable(record.field(column.field()))
                    .is_some_and(|value| value_text(value).to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect()
}

/// Stable sort by one field. Nulls sort after non-nulls ascending and before
/// them descending; the descending order is the exact mirror of ascending.
fn sort_rows(rows: &mut [Record], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_fields(a.field(field), b.field(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (nullable(a), nullable(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

/// Missing fields and explicit JSON nulls both count as null.
fn nullable(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => compare_strings(a, b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        // Mixed types fall back to their textual rendering.
        _ => compare_strings(&value_text(a), &value_text(b)),
    }
}

/// Case-insensitive lexicographic comparison, with the original casing as a
/// deterministic tie-breaker.
fn compare_strings(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// How a cell value reads as text, for substring search and mixed-type
/// comparison. Strings render without quotes.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
