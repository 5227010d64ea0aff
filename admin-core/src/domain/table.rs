//! Table state controller: pagination, sorting, search, and refresh.
//!
//! The controller owns the query describing which slice of the filtered,
//! sorted user set is on screen, plus the fetched page and the loading and
//! error flags. Responses apply last-query-wins: each dispatched refresh
//! carries a sequence number, and a response is dropped when a newer
//! refresh has been dispatched since. A slow early request can therefore
//! never overwrite a faster later one.
//!
//! The UI shell is expected to call [`TableController::refresh`] exactly
//! once after each query mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

#[cfg(test)]
use super::ports::DirectoryError;
use super::ports::UserDirectory;
use super::query::{PAGE_SIZE_OPTIONS, Page, Query};
use super::user::UserRecord;

#[derive(Debug)]
struct TableState {
    query: Query,
    page: Page<UserRecord>,
    loading: bool,
    error: bool,
    /// Sequence number of the most recently dispatched refresh.
    dispatched: u64,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: Query::default(),
            page: Page::empty(),
            // The screen opens in the loading state so placeholder rows
            // show until the first refresh settles.
            loading: true,
            error: false,
            dispatched: 0,
        }
    }
}

/// Point-in-time view of the table for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// Query the displayed page corresponds to, or will once loaded.
    pub query: Query,
    /// Most recently applied page of results.
    pub page: Page<UserRecord>,
    /// A refresh is in flight.
    pub loading: bool,
    /// The last settled refresh failed; render the no-data state.
    pub error: bool,
}

impl TableSnapshot {
    /// Placeholder rows to render while loading, sized to the page so the
    /// layout does not collapse. Zero once the refresh settles.
    #[must_use]
    pub fn skeleton_rows(&self) -> usize {
        if self.loading { self.query.page_size } else { 0 }
    }
}

/// Drives the user table: query transitions plus race-free refreshes.
pub struct TableController<D> {
    directory: Arc<D>,
    state: Mutex<TableState>,
}

impl<D> TableController<D> {
    /// Controller with the default query: first page, five rows, ascending
    /// by first name, empty search.
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            state: Mutex::new(TableState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TableState> {
        // State stays usable even if a panic poisoned the lock; every
        // mutation leaves it internally consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current view of the table.
    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.lock();
        TableSnapshot {
            query: state.query.clone(),
            page: state.page.clone(),
            loading: state.loading,
            error: state.error,
        }
    }

    /// Replace the search text; the page rewinds to 0.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let mut state = self.lock();
        state.query = state.query.clone().with_search(text);
    }

    /// Select a sort column, toggling direction on re-selection.
    pub fn set_sort(&self, column: impl Into<String>) {
        let mut state = self.lock();
        state.query = state.query.clone().with_sort(column);
    }

    /// Jump to another page of the current result set.
    pub fn set_page_index(&self, page: usize) {
        let mut state = self.lock();
        state.query = state.query.clone().with_page(page);
    }

    /// Change rows-per-page; sizes outside the selector options are
    /// ignored.
    pub fn set_page_size(&self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            warn!(size, "ignoring page size outside the selector options");
            return;
        }
        let mut state = self.lock();
        state.query = state.query.clone().with_page_size(size);
    }

    /// Shared handle to the directory, for wiring a loader and form to the
    /// same collaborator.
    #[must_use]
    pub fn directory(&self) -> Arc<D> {
        Arc::clone(&self.directory)
    }
}

impl<D: UserDirectory> TableController<D> {
    /// Fetch the page described by the current query.
    ///
    /// Marks the table loading, releases the lock across the network call,
    /// and applies the response only while no newer refresh has been
    /// dispatched. A failure becomes the error flag; nothing is thrown
    /// across the UI boundary.
    pub async fn refresh(&self) {
        let (sequence, query) = {
            let mut state = self.lock();
            state.dispatched += 1;
            state.loading = true;
            state.error = false;
            (state.dispatched, state.query.clone())
        };

        let result = self.directory.list_users(&query).await;

        let mut state = self.lock();
        if state.dispatched != sequence {
            debug!(
                sequence,
                latest = state.dispatched,
                "discarding stale page response"
            );
            return;
        }
        state.loading = false;
        match result {
            Ok(page) => {
                state.page = page;
            }
            Err(error) => {
                warn!(%error, "refreshing the user table failed");
                state.error = true;
            }
        }
    }
}
