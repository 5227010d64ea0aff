//! Draft construction for the add and edit actions.

use std::sync::Arc;

use tracing::debug;

use super::ports::{DirectoryError, UserDirectory};
use super::user::UserDraft;

/// Builds the draft a form session starts from.
pub struct DraftLoader<D> {
    directory: Arc<D>,
}

impl<D> DraftLoader<D> {
    /// Loader backed by the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Blank draft for the add action. No side effects, never fails.
    #[must_use]
    pub fn blank(&self) -> UserDraft {
        UserDraft::blank()
    }
}

impl<D: UserDirectory> DraftLoader<D> {
    /// Fetch user `id` and shape it for editing.
    ///
    /// Birth timestamps are reduced to the bare calendar date the form's
    /// date input expects. [`DirectoryError::NotFound`] and transport
    /// failures propagate so the caller can show a dismissable notice
    /// instead of opening the form.
    pub async fn load(&self, id: i64) -> Result<UserDraft, DirectoryError> {
        let record = self.directory.get_user(id).await?;
        debug!(id, "loaded user record into a draft");
        Ok(UserDraft::from(record))
    }
}
