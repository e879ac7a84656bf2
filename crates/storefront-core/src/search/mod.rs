//! Search module.
//!
//! Contains the composable filters and the filter/sort pipeline that
//! derives the visible product grid.

mod filter;
mod query;

pub use filter::Filter;
pub use query::{apply, SearchQuery, SortMode};
