//! The form's interaction state machine.
//!
//! Edits only replace raw input. Blur validates one field, submit validates
//! all of them, and reset returns to the empty form. Every event is fully
//! applied before the call returns.
//!
//! # Example
//!
//! ```
//! use signup_form::fields::Field;
//! use signup_form::form::{EditEvent, Form, FormEvent};
//!
//! let mut form = Form::new();
//! form.handle(EditEvent::Email("a@b.com".into()).into());
//! form.handle(EditEvent::DisplayName("Alice".into()).into());
//! form.handle(EditEvent::Age(Some(25)).into());
//!
//! let record = form.handle(FormEvent::Submit).unwrap();
//! assert_eq!(record.display_name.as_str(), "Alice");
//! assert_eq!(form.state().error_text(Field::Email), None);
//! ```

mod aggregate;
mod event;
mod state;

use log::{debug, trace};

use crate::policy::FormPolicy;
use crate::record::ValidatedRecord;
use crate::submit::{SubmitError, Submitter};
use crate::validation::Validation;

pub use aggregate::{validate_all, validate_field};
pub use event::{AgeInputError, EditEvent, FormEvent};
pub use state::{FieldErrors, FormState};

/// Apply one event to `state`.
///
/// Returns a record only for a submit where every field is valid.
pub fn update(
    state: &mut FormState,
    event: FormEvent,
    policy: &FormPolicy,
) -> Option<ValidatedRecord> {
    match event {
        FormEvent::Edit(edit) => {
            trace!("Edit: {}", edit.field());
            match edit {
                EditEvent::Email(value) => state.email = value,
                EditEvent::DisplayName(value) => state.display_name = value,
                EditEvent::Age(value) => state.age = value,
            }
            None
        }
        FormEvent::Blur(field) => {
            trace!("Blur: {}", field);
            validate_field(state, field, policy);
            None
        }
        FormEvent::Submit => match validate_all(state, policy) {
            Validation::Valid(record) => {
                debug!("Submit accepted");
                Some(record)
            }
            rejected => {
                debug!(
                    "Submit rejected: {} invalid field(s), first {:?}",
                    rejected.errors().len(),
                    rejected.first_invalid_field()
                );
                None
            }
        },
        FormEvent::Reset => {
            trace!("Reset");
            *state = FormState::new();
            None
        }
    }
}

/// A form state together with the policy it is validated against.
#[derive(Debug, Clone, Default)]
pub struct Form {
    policy: FormPolicy,
    state: FormState,
}

impl Form {
    /// Create an empty form using the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty form using a custom policy.
    pub fn with_policy(policy: FormPolicy) -> Self {
        Self {
            policy,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Apply one event. Returns the record produced by a successful submit.
    pub fn handle(&mut self, event: FormEvent) -> Option<ValidatedRecord> {
        update(&mut self.state, event, &self.policy)
    }

    /// Apply one event and pass any produced record on to `submitter`.
    ///
    /// The form stays editable whether or not the submitter succeeds.
    pub fn dispatch<S>(&mut self, event: FormEvent, submitter: &mut S) -> Result<(), SubmitError>
    where
        S: Submitter + ?Sized,
    {
        match self.handle(event) {
            Some(record) => {
                debug!("Handing record to submitter");
                submitter.submit(record)
            }
            None => Ok(()),
        }
    }
}
