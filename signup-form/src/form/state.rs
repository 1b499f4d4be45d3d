use crate::fields::{AgeError, DisplayNameError, EmailError, Field};
use crate::validation::FieldError;

/// Current error per field. `None` means the field has no error to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<EmailError>,
    pub display_name: Option<DisplayNameError>,
    pub age: Option<AgeError>,
}

/// Raw input for every field plus the derived error slots.
///
/// Raw values are written by edit events; error slots are written only by the
/// validators on blur and submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(crate) email: String,
    pub(crate) display_name: String,
    pub(crate) age: Option<i32>,
    pub(crate) errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Raw input
    // -------------------------------------------------------------------------

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Raw value of a field rendered as text. An absent age renders empty.
    pub fn raw_text(&self, field: Field) -> String {
        match field {
            Field::Email => self.email.clone(),
            Field::DisplayName => self.display_name.clone(),
            Field::Age => self.age.map(|age| age.to_string()).unwrap_or_default(),
        }
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current error of a field, if any.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.errors.email.map(FieldError::from),
            Field::DisplayName => self.errors.display_name.map(FieldError::from),
            Field::Age => self.errors.age.map(FieldError::from),
        }
    }

    /// Text to show next to a field, if it has an error.
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.error(field).map(|err| err.to_string())
    }

    /// Check that no field currently shows an error.
    pub fn is_clean(&self) -> bool {
        self.errors == FieldErrors::default()
    }
}
