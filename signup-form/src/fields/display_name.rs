use std::fmt;

use serde::Serialize;

/// Why a display name input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisplayNameError {
    #[error("Display Name is required.")]
    Empty,

    #[error("Display Name is longer than {max} characters.")]
    TooLong { max: usize },
}

/// A non-empty display name within the configured length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Parse raw input into a display name of at most `max_len` characters.
    ///
    /// Length is counted in characters after trimming, not bytes.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, DisplayNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DisplayNameError::Empty);
        }
        if trimmed.chars().count() > max_len {
            return Err(DisplayNameError::TooLong { max: max_len });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DISPLAY_NAME_MAX_LEN;

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(DisplayName::parse("", 50), Err(DisplayNameError::Empty));
        assert_eq!(DisplayName::parse("  ", 50), Err(DisplayNameError::Empty));
    }

    #[test]
    fn test_length_limit() {
        let at_limit = "a".repeat(DISPLAY_NAME_MAX_LEN);
        let over_limit = "a".repeat(DISPLAY_NAME_MAX_LEN + 1);

        assert!(DisplayName::parse(&at_limit, DISPLAY_NAME_MAX_LEN).is_ok());
        assert_eq!(
            DisplayName::parse(&over_limit, DISPLAY_NAME_MAX_LEN),
            Err(DisplayNameError::TooLong { max: 50 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 5 characters, 10 bytes
        assert!(DisplayName::parse("ééééé", 5).is_ok());
        assert_eq!(
            DisplayName::parse("éééééé", 5),
            Err(DisplayNameError::TooLong { max: 5 })
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let name = DisplayName::parse("  Alice  ", 5).unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_deterministic() {
        let over_limit = "a".repeat(DISPLAY_NAME_MAX_LEN + 1);
        for raw in ["", "  ", "Alice", over_limit.as_str()] {
            assert_eq!(
                DisplayName::parse(raw, DISPLAY_NAME_MAX_LEN),
                DisplayName::parse(raw, DISPLAY_NAME_MAX_LEN)
            );
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(
            DisplayNameError::TooLong { max: 50 }.to_string(),
            "Display Name is longer than 50 characters."
        );
    }
}
