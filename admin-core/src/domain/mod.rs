//! Domain types and engines for the user administration screen.
//!
//! Purpose: turn UI events (search text, sort clicks, page changes, field
//! edits) into well-defined directory queries and gate record submission
//! behind format validation. Types stay framework free; the UI shell reads
//! snapshots and calls the action methods, and is expected to follow every
//! query mutation with exactly one [`TableController::refresh`].
//!
//! Public surface:
//! - TableController — pagination, sort, and search state plus race-free
//!   refreshes.
//! - UserForm / validate — draft editing and submit-time validation.
//! - DraftLoader — blank or fetched drafts for a form session.
//! - UserDirectory — port to the remote user API.

pub mod form;
pub mod loader;
pub mod ports;
pub mod query;
pub mod table;
pub mod user;

pub use self::form::{Field, FormMode, FormState, SaveOutcome, UserForm, ValidationErrors, validate};
pub use self::loader::DraftLoader;
pub use self::ports::{DirectoryError, UserDirectory};
pub use self::query::{DEFAULT_SORT_COLUMN, PAGE_SIZE_OPTIONS, Page, Query, SortDirection};
pub use self::table::{TableController, TableSnapshot};
pub use self::user::{UserDraft, UserRecord};
