//! User data models.
//!
//! [`UserRecord`] is the read model returned by the directory;
//! [`UserDraft`] is the all-string write model a form session edits. Serde
//! attributes pin both to the administration API's wire contract: camelCase
//! field names, plus the API's historical capitalised `Id` on the write
//! payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as returned by the directory's read endpoints.
///
/// ## Invariants
/// - `id` is server-assigned and immutable once the record exists.
/// - `is_deleted` marks soft-deleted records. The flag is carried but never
///   filtered on client-side; the list endpoint handles exclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Argentine taxpayer id, `XX-XXXXXXXX-X`.
    pub cuit: String,
    /// Birth date as a full timestamp when the server recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Soft-delete marker.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Editable draft of a user record.
///
/// Every field is a string so the draft can hold whatever the user typed;
/// [`validate`](super::form::validate) decides what is acceptable at save
/// time. `id` stays `0` until the server assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Identifier of the record being edited, `0` when creating.
    #[serde(rename = "Id")]
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Argentine taxpayer id.
    pub cuit: String,
    /// Bare calendar date (`YYYY-MM-DD`) or empty.
    #[serde(default)]
    pub birth_date: String,
    /// Postal address, possibly empty.
    #[serde(default)]
    pub address: String,
    /// Contact phone number, possibly empty.
    #[serde(default)]
    pub phone_number: String,
}

impl UserDraft {
    /// Blank draft used when creating a new user.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the draft refers to an already persisted record.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

impl From<UserRecord> for UserDraft {
    /// Shape a fetched record for editing.
    ///
    /// The birth timestamp is reduced to the bare calendar date the form's
    /// date input expects, or the empty string when absent.
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            cuit: record.cuit,
            birth_date: record
                .birth_date
                .map(|timestamp| timestamp.date_naive().to_string())
                .unwrap_or_default(),
            address: record.address.unwrap_or_default(),
            phone_number: record.phone_number.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests;
