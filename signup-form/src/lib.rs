//! Validation core for a three-field signup form.
//!
//! Raw input for email, display name and age goes in; either a
//! [`ValidatedRecord`] or a per-field set of error reasons comes out.

pub mod fields;
pub mod form;
pub mod policy;
pub mod record;
pub mod submit;
pub mod validation;

pub use form::{Form, FormEvent, FormState};
pub use record::ValidatedRecord;

pub mod prelude {
    pub use crate::fields::{
        Age, AgeError, DisplayName, DisplayNameError, Email, EmailError, Field,
    };
    pub use crate::form::{EditEvent, FieldErrors, Form, FormEvent, FormState};
    pub use crate::policy::{AGE_MAX, AGE_MIN, DISPLAY_NAME_MAX_LEN, FormPolicy, PolicyError};
    pub use crate::record::ValidatedRecord;
    pub use crate::submit::{LogSubmitter, SubmitError, Submitter};
    pub use crate::validation::{FieldError, Validation};
}
