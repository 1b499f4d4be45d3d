use std::fmt;

use serde::Serialize;

/// Why an age input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("Age is required.")]
    Missing,

    #[error("Age must be at least {min}.")]
    BelowMin { min: i32 },

    #[error("Age must be at most {max}.")]
    AboveMax { max: i32 },
}

/// An age inside the configured inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    /// Parse an optional integer into an age within `min..=max`.
    pub fn parse(raw: Option<i32>, min: i32, max: i32) -> Result<Self, AgeError> {
        let Some(value) = raw else {
            return Err(AgeError::Missing);
        };
        if value < min {
            return Err(AgeError::BelowMin { min });
        }
        if value > max {
            return Err(AgeError::AboveMax { max });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
