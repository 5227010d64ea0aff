//! Core engines behind the user administration screen.
//!
//! The crate is headless: it owns the table state (pagination, sorting,
//! search), draft loading, and submit-time validation, and reaches the
//! remote API only through the [`domain::UserDirectory`] port. Rendering,
//! routing, and the HTTP client are external collaborators.

pub mod domain;

pub use domain::{
    DirectoryError, DraftLoader, Field, FormMode, FormState, Page, Query, SaveOutcome,
    SortDirection, TableController, TableSnapshot, UserDirectory, UserDraft, UserForm, UserRecord,
    ValidationErrors,
};
