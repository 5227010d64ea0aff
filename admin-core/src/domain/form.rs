//! Form validation and save engine for a single user draft.
//!
//! Validation mirrors the screen's submit-time behaviour: nothing runs per
//! keystroke, every rule is evaluated independently so all violations are
//! collected, and messages are the screen's fixed-locale display strings.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use super::ports::{DirectoryError, UserDirectory};
use super::user::UserDraft;

static CUIT_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Two digits, hyphen, eight digits, hyphen, one digit.
fn cuit_regex() -> &'static Regex {
    CUIT_RE.get_or_init(|| {
        Regex::new(r"^\d{2}-\d{8}-\d$")
            .unwrap_or_else(|error| panic!("cuit regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Editable draft fields addressable by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email address.
    Email,
    /// Bare calendar date string.
    BirthDate,
    /// Argentine taxpayer id.
    Cuit,
    /// Postal address.
    Address,
    /// Contact phone number.
    PhoneNumber,
}

/// Field-keyed validation messages; empty means the draft is valid.
///
/// First and last name share the single `name` slot because the screen
/// shows one combined message under both inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// Whether the draft passed every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Display message for a field key, if that rule was violated.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterate field keys and messages in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_owned());
    }
}

/// Validate a draft against the submit-time rules.
///
/// Pure and total: no side effects, and the same draft always yields the
/// same result. All violations are collected rather than stopping at the
/// first.
#[must_use]
pub fn validate(draft: &UserDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !cuit_regex().is_match(&draft.cuit) {
        errors.insert("cuit", "El CUIT debe tener el formato XX-XXXXXXXX-X");
    }
    if !email_regex().is_match(&draft.email) {
        errors.insert("email", "Formato de email invalido");
    }
    if draft.first_name.is_empty() || draft.last_name.is_empty() {
        errors.insert("name", "El nombre y apellido son obligatorios");
    }
    if !draft.birth_date.is_empty()
        && NaiveDate::parse_from_str(&draft.birth_date, "%Y-%m-%d").is_err()
    {
        errors.insert("birthDate", "La fecha de nacimiento no es válida");
    }

    errors
}

/// Outcome of a save attempt that did not fail in transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft was persisted and the session is closed.
    Saved,
    /// Local validation failed; the errors are held on the form.
    Invalid,
}

/// Whether the session edits an existing record or creates a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The draft has no identifier yet; saving calls the create endpoint.
    Create,
    /// The draft carries an identifier; saving calls the update endpoint.
    Edit,
}

/// Lifecycle of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// The draft is open for field edits and save attempts.
    Editing,
    /// The session ended, by a successful save or by discarding.
    Closed,
}

/// One modal session over a user draft.
///
/// Holds the draft, the validation errors from the last save attempt, and
/// the session state. The mode follows the draft: an identifier means edit,
/// none means create.
pub struct UserForm<D> {
    directory: Arc<D>,
    draft: UserDraft,
    errors: ValidationErrors,
    mode: FormMode,
    state: FormState,
}

impl<D> UserForm<D> {
    /// Open a session over `draft`.
    pub fn new(directory: Arc<D>, draft: UserDraft) -> Self {
        let mode = if draft.is_persisted() {
            FormMode::Edit
        } else {
            FormMode::Create
        };
        Self {
            directory,
            draft,
            errors: ValidationErrors::default(),
            mode,
            state: FormState::Editing,
        }
    }

    /// Current draft contents.
    #[must_use]
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Errors from the most recent save attempt.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether the session creates or edits.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether the session is still open.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Replace one field with whatever the user typed.
    ///
    /// Validation only runs at save time, so this never touches the error
    /// map.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Email => self.draft.email = value,
            Field::BirthDate => self.draft.birth_date = value,
            Field::Cuit => self.draft.cuit = value,
            Field::Address => self.draft.address = value,
            Field::PhoneNumber => self.draft.phone_number = value,
        }
    }

    /// Abandon the session, clearing any errors.
    pub fn discard(&mut self) {
        self.errors = ValidationErrors::default();
        self.state = FormState::Closed;
    }
}

impl<D: UserDirectory> UserForm<D> {
    /// Validate and, when clean, submit the draft.
    ///
    /// Invalid drafts never reach the directory: the errors are stored and
    /// [`SaveOutcome::Invalid`] comes back. A transport or server failure
    /// is returned for the caller to surface; the draft and the editing
    /// state survive so the user can retry without losing input.
    pub async fn save(&mut self) -> Result<SaveOutcome, DirectoryError> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(SaveOutcome::Invalid);
        }

        let result = match self.mode {
            FormMode::Edit => self.directory.update_user(&self.draft).await,
            FormMode::Create => self.directory.create_user(&self.draft).await,
        };

        match result {
            Ok(_) => {
                self.errors = ValidationErrors::default();
                self.draft = UserDraft::blank();
                self.state = FormState::Closed;
                Ok(SaveOutcome::Saved)
            }
            Err(error) => {
                warn!(%error, "saving user draft failed");
                Err(error)
            }
        }
    }
}
