use std::fmt;

use email_address::{EmailAddress, Options};
use serde::Serialize;

/// Why an email input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required.")]
    Empty,

    #[error("Email is not a valid address.")]
    Invalid,
}

/// A syntactically valid email address, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse raw input into an email address.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        // Bare addresses only; "Name <addr>" forms are rejected.
        let options = Options::default().without_display_text();
        EmailAddress::parse_with_options(trimmed, options)
            .map(|address| Self(address.email()))
            .map_err(|_| EmailError::Invalid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
