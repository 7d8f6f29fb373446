//! Pagination calculator shared by the repository and the HTTP layer.
//!
//! Pages are 1-based; row ranges are inclusive and zero-based. The window
//! itself is pushed down to the store as OFFSET/LIMIT.

use serde::{Deserialize, Serialize};

/// One page of results plus the metadata the client needs to paginate.
/// Serialized with the camelCase keys the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_more: bool,
}

/// Map a 1-based page to an inclusive zero-based row range.
///
/// page 1 / size 10 -> (0, 9); page 3 / size 10 -> (20, 29).
/// Page 0 clamps to the first window rather than underflowing.
pub fn page_range(page: u64, page_size: u64) -> (u64, u64) {
    let from = page.saturating_sub(1) * page_size;
    let to = from + page_size.saturating_sub(1);
    (from, to)
}

/// Rows exist beyond the current page iff the window ends short of the
/// total matching-row count. Derived, never stored.
pub fn has_more(page: u64, page_size: u64, total: u64) -> bool {
    page * page_size < total
}
