//! Deterministic pagination over a full result set.

use serde::{Deserialize, Serialize};

/// Items per page, shared by every paginated response.
pub const PAGE_SIZE: usize = 10;

/// One page of results with total-set metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage<T> {
    /// 1-based page number that was actually served.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

/// Slice a full result set into one page.
///
/// A page number of 0 is clamped to 1. A page beyond the last returns an
/// empty item list with the totals intact, so callers detect end-of-results
/// by comparing `page` against `total_pages` rather than handling an error.
pub fn paginate<T>(items: Vec<T>, page: usize) -> ResultPage<T> {
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);

    let items: Vec<T> = items
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    ResultPage {
        page,
        total_pages,
        total_items,
        items,
    }
}
