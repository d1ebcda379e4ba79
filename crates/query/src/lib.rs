//! `cephas-query` — the tabular query engine behind every list screen.
//!
//! A pure transformation of `(records, columns, query state)` into one
//! visible page plus totals, applied in a fixed order: search, then sort,
//! then paginate.
//!
//! - No IO
//! - No panics
//! - Total over its inputs (never errors)

pub mod state;
pub mod table;

pub use state::{QueryState, SortDirection};
pub use table::{Column, TablePage, apply, filtered};
