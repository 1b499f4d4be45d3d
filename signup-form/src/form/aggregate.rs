//! Running the field validators against a [`FormState`].

use crate::fields::{Age, DisplayName, Email, Field};
use crate::policy::FormPolicy;
use crate::record::ValidatedRecord;
use crate::validation::Validation;

use super::state::FormState;

/// Validate every field, refresh every error slot, and build a record only if
/// all three fields passed.
///
/// No field is skipped when an earlier one fails.
pub fn validate_all(state: &mut FormState, policy: &FormPolicy) -> Validation<ValidatedRecord> {
    let email = Email::parse(&state.email);
    let display_name = DisplayName::parse(&state.display_name, policy.display_name_max_len);
    let age = Age::parse(state.age, policy.age_min, policy.age_max);

    state.errors.email = email.as_ref().err().copied();
    state.errors.display_name = display_name.as_ref().err().copied();
    state.errors.age = age.as_ref().err().copied();

    Validation::from(email)
        .zip(Validation::from(display_name))
        .zip(Validation::from(age))
        .map(|((email, display_name), age)| ValidatedRecord {
            email,
            display_name,
            age,
        })
}

/// Validate a single field and refresh only its error slot.
///
/// Fields whose validator normalizes (email and display name are trimmed)
/// have their raw input replaced by the normalized value on success.
pub fn validate_field(state: &mut FormState, field: Field, policy: &FormPolicy) {
    match field {
        Field::Email => match Email::parse(&state.email) {
            Ok(email) => {
                state.email = email.as_str().to_string();
                state.errors.email = None;
            }
            Err(err) => state.errors.email = Some(err),
        },
        Field::DisplayName => {
            match DisplayName::parse(&state.display_name, policy.display_name_max_len) {
                Ok(name) => {
                    state.display_name = name.as_str().to_string();
                    state.errors.display_name = None;
                }
                Err(err) => state.errors.display_name = Some(err),
            }
        }
        Field::Age => {
            state.errors.age = Age::parse(state.age, policy.age_min, policy.age_max).err();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{AgeError, DisplayNameError, EmailError};
    use crate::validation::FieldError;

    fn state(email: &str, name: &str, age: Option<i32>) -> FormState {
        FormState {
            email: email.to_string(),
            display_name: name.to_string(),
            age,
            ..FormState::default()
        }
    }

    #[test]
    fn test_all_invalid_reports_every_field() {
        let mut s = state("", "", None);
        let outcome = validate_all(&mut s, &FormPolicy::default());

        assert_eq!(
            outcome.errors(),
            &[
                FieldError::Email(EmailError::Empty),
                FieldError::DisplayName(DisplayNameError::Empty),
                FieldError::Age(AgeError::Missing),
            ]
        );
        assert_eq!(s.errors.email, Some(EmailError::Empty));
        assert_eq!(s.errors.display_name, Some(DisplayNameError::Empty));
        assert_eq!(s.errors.age, Some(AgeError::Missing));
    }

    #[test]
    fn test_all_valid_clears_stale_errors() {
        let mut s = state("a@b.com", "Alice", Some(25));
        s.errors.email = Some(EmailError::Invalid);
        s.errors.age = Some(AgeError::Missing);

        let record = validate_all(&mut s, &FormPolicy::default()).ok().unwrap();

        assert!(s.is_clean());
        assert_eq!(record.email.as_str(), "a@b.com");
        assert_eq!(record.display_name.as_str(), "Alice");
        assert_eq!(record.age.get(), 25);
    }

    #[test]
    fn test_validate_all_leaves_raw_input_untouched() {
        let mut s = state("  a@b.com  ", " Alice ", Some(25));
        validate_all(&mut s, &FormPolicy::default());
        assert_eq!(s.email, "  a@b.com  ");
        assert_eq!(s.display_name, " Alice ");
    }

    #[test]
    fn test_policy_is_applied() {
        let policy = FormPolicy {
            display_name_max_len: 3,
            age_min: 18,
            age_max: 21,
        };
        let mut s = state("a@b.com", "Alice", Some(17));
        validate_all(&mut s, &policy);

        assert_eq!(s.errors.display_name, Some(DisplayNameError::TooLong { max: 3 }));
        assert_eq!(s.errors.age, Some(AgeError::BelowMin { min: 18 }));
    }

    #[test]
    fn test_validate_field_touches_one_slot() {
        let mut s = state("bad", "", None);
        s.errors.age = Some(AgeError::AboveMax { max: 150 });

        validate_field(&mut s, Field::Email, &FormPolicy::default());

        assert_eq!(s.errors.email, Some(EmailError::Invalid));
        assert_eq!(s.errors.display_name, None);
        assert_eq!(s.errors.age, Some(AgeError::AboveMax { max: 150 }));
    }

    #[test]
    fn test_validate_field_normalizes_on_success() {
        let mut s = state(" a@b.com ", "  Bob ", Some(3));
        let policy = FormPolicy::default();

        validate_field(&mut s, Field::Email, &policy);
        validate_field(&mut s, Field::DisplayName, &policy);
        validate_field(&mut s, Field::Age, &policy);

        assert_eq!(s.email, "a@b.com");
        assert_eq!(s.display_name, "Bob");
        assert_eq!(s.age, Some(3));
        assert!(s.is_clean());
    }

    #[test]
    fn test_validate_field_keeps_raw_on_failure() {
        let mut s = state("  not an email ", "", None);
        validate_field(&mut s, Field::Email, &FormPolicy::default());
        assert_eq!(s.email, "  not an email ");
    }
}
