use crate::fields::{AgeError, DisplayNameError, EmailError, Field};

/// A rejected field together with the reason it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    DisplayName(#[from] DisplayNameError),

    #[error(transparent)]
    Age(#[from] AgeError),
}

impl FieldError {
    /// The field that failed.
    pub fn field(&self) -> Field {
        match self {
            Self::Email(_) => Field::Email,
            Self::DisplayName(_) => Field::DisplayName,
            Self::Age(_) => Field::Age,
        }
    }
}

/// Outcome of validating one or more fields.
///
/// Combining outcomes with [`zip`](Self::zip) never short-circuits: errors
/// from both sides are kept, and a value is built only when every side is
/// valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// All fields passed validation.
    Valid(T),
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl<T> Validation<T> {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the field of the first validation error (if any).
    pub fn first_invalid_field(&self) -> Option<Field> {
        self.first_error().map(FieldError::field)
    }

    /// Combine with another outcome, keeping the errors of both.
    pub fn zip<U>(self, other: Validation<U>) -> Validation<(T, U)> {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Self::Invalid(mut a), Validation::Invalid(b)) => {
                a.extend(b);
                Validation::Invalid(a)
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    /// Transform the valid value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<T, E: Into<FieldError>> From<Result<T, E>> for Validation<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(err) => Self::Invalid(vec![err.into()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(n: i32) -> Validation<i32> {
        Validation::Valid(n)
    }

    fn invalid(err: impl Into<FieldError>) -> Validation<i32> {
        Validation::Invalid(vec![err.into()])
    }

    #[test]
    fn test_zip_valid() {
        let combined = valid(1).zip(valid(2)).map(|(a, b)| a + b);
        assert_eq!(combined, Validation::Valid(3));
    }

    #[test]
    fn test_zip_keeps_all_errors_in_order() {
        let combined = invalid(EmailError::Empty)
            .zip(valid(2))
            .zip(invalid(AgeError::Missing));

        assert_eq!(
            combined.errors(),
            &[FieldError::Email(EmailError::Empty), FieldError::Age(AgeError::Missing)]
        );
        assert_eq!(combined.first_invalid_field(), Some(Field::Email));
    }

    #[test]
    fn test_zip_single_failure_blocks_value() {
        let combined = valid(1).zip(invalid(DisplayNameError::Empty));
        assert!(combined.is_invalid());
        assert_eq!(combined.ok(), None);
    }

    #[test]
    fn test_from_result() {
        let ok: Validation<u8> = Ok::<u8, EmailError>(7).into();
        let err: Validation<u8> = Err::<u8, _>(AgeError::BelowMin { min: 0 }).into();

        assert_eq!(ok, Validation::Valid(7));
        assert_eq!(
            err.errors(),
            &[FieldError::Age(AgeError::BelowMin { min: 0 })]
        );
    }

    #[test]
    fn test_field_error_message_is_reason_message() {
        let err = FieldError::from(EmailError::Empty);
        assert_eq!(err.field(), Field::Email);
        assert_eq!(err.to_string(), "Email is required.");
    }
}
