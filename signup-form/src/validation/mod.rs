//! Error accumulation across fields.
//!
//! [`Validation`] collects every field's outcome in one pass and builds the
//! combined value only when all of them succeeded.
//!
//! # Example
//!
//! ```
//! use signup_form::fields::{Age, DisplayName, Email};
//! use signup_form::validation::Validation;
//!
//! let outcome = Validation::from(Email::parse(""))
//!     .zip(Validation::from(DisplayName::parse("Alice", 50)))
//!     .zip(Validation::from(Age::parse(None, 0, 150)));
//!
//! assert_eq!(outcome.errors().len(), 2);
//! ```

mod result;

pub use result::{FieldError, Validation};
