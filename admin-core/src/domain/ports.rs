//! Port describing the remote user directory.
//!
//! The HTTP client behind this trait is an external collaborator. The core
//! only sees strongly typed errors, so call sites fold failures into their
//! own state instead of handling transport details.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use super::query::{Page, Query};
use super::user::{UserDraft, UserRecord};

/// Failures surfaced by [`UserDirectory`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The requested record does not exist. It may have vanished between
    /// listing it and opening it for edit.
    #[error("user not found")]
    NotFound,
    /// Transport-level failure, including timeouts.
    #[error("user directory unreachable: {message}")]
    Network {
        /// Adapter-provided description of the failure.
        message: String,
    },
    /// The server reported a failure of its own.
    #[error("user directory server error: {message}")]
    Server {
        /// Adapter-provided description of the failure.
        message: String,
    },
    /// The server rejected the submitted draft.
    #[error("user directory rejected the record: {message}")]
    Rejected {
        /// Server-provided rejection reason.
        message: String,
    },
}

impl DirectoryError {
    /// Helper for transport failures.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Helper for server-side failures.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Helper for server-side validation rejections.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Remote API surface consumed by the table, loader, and form.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch one page of users matching `query`.
    async fn list_users(&self, query: &Query) -> Result<Page<UserRecord>, DirectoryError>;

    /// Fetch a single user by identifier.
    async fn get_user(&self, id: i64) -> Result<UserRecord, DirectoryError>;

    /// Create a new user from a draft without an identifier.
    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, DirectoryError>;

    /// Update an existing user; the draft must carry its identifier.
    async fn update_user(&self, draft: &UserDraft) -> Result<UserRecord, DirectoryError>;
}
