//! Field validators.
//!
//! Each field owns a pure `parse` function from raw input to either a typed
//! value or a closed error reason. The `Display` impl of each reason is the
//! text shown next to the field.

mod age;
mod display_name;
mod email;

use std::fmt;

pub use age::{Age, AgeError};
pub use display_name::{DisplayName, DisplayNameError};
pub use email::{Email, EmailError};

/// Identifies one of the form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    DisplayName,
    Age,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 3] = [Field::Email, Field::DisplayName, Field::Age];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::DisplayName => "Display Name",
            Self::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
