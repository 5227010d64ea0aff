//! Table query state and the pagination envelope.
//!
//! [`Query`] is the full parameter set (pagination + sort + search +
//! filter) describing one request for a page of records. Transitions are
//! pure: each returns the next query value, and any transition that changes
//! what the result set looks like rewinds the page to 0 so a stale offset
//! is never shown against a new filter.

use serde::{Deserialize, Serialize};

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Default sort column; the screen only ever sorts by first name.
pub const DEFAULT_SORT_COLUMN: &str = "firstName";

/// Sort directions accepted by the list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// A before Z.
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    /// Z before A.
    #[serde(rename = "DESC")]
    Descending,
}

/// One request for a page of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Page index, 0-based.
    pub page: usize,
    /// Rows per page, one of [`PAGE_SIZE_OPTIONS`].
    pub page_size: usize,
    /// Sort direction for `sort_column`.
    pub sort: SortDirection,
    /// Column identifier the results are ordered by.
    pub sort_column: String,
    /// Free text matched against the name fields.
    pub search: String,
    /// Whether soft-deleted records are included. Always dispatched false.
    pub include_inactive: bool,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
            sort: SortDirection::Ascending,
            sort_column: DEFAULT_SORT_COLUMN.to_owned(),
            search: String::new(),
            include_inactive: false,
        }
    }
}

impl Query {
    /// Row offset of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Replace the search text and rewind to the first page.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self.page = 0;
        self
    }

    /// Select a sort column.
    ///
    /// Re-selecting the current column while ascending flips to descending;
    /// any other selection sorts ascending on the chosen column.
    #[must_use]
    pub fn with_sort(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        let flip = self.sort_column == column && self.sort == SortDirection::Ascending;
        self.sort = if flip {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort_column = column;
        self.page = 0;
        self
    }

    /// Jump to another page of the current result set.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Change the rows-per-page setting and rewind to the first page.
    ///
    /// Sizes outside [`PAGE_SIZE_OPTIONS`] leave the query untouched.
    #[must_use]
    pub fn with_page_size(mut self, size: usize) -> Self {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
        self
    }
}

/// One page of results plus the total match count.
///
/// `total_items` counts every record matching the query, not just the rows
/// on this page; the pager needs it to size itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Rows for the requested page, at most `page_size` of them.
    pub items: Vec<T>,
    /// Records matching the query across every page.
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Page with no rows and a zero count.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
