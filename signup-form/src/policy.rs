//! Tunable limits applied by the field validators.

use serde::Deserialize;

/// Maximum display name length, in characters.
pub const DISPLAY_NAME_MAX_LEN: usize = 50;

/// Smallest accepted age (inclusive).
pub const AGE_MIN: i32 = 0;

/// Largest accepted age (inclusive).
pub const AGE_MAX: i32 = 150;

/// Error returned when a policy cannot be used to validate a form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("age range is inverted: min {min} is greater than max {max}")]
    InvertedAgeRange { min: i32, max: i32 },

    #[error("display name limit must be at least 1 character")]
    ZeroDisplayNameLimit,
}

/// Limits used by the validators.
///
/// Defaults come from [`DISPLAY_NAME_MAX_LEN`], [`AGE_MIN`] and [`AGE_MAX`].
/// Missing keys fall back to their default when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    pub display_name_max_len: usize,
    pub age_min: i32,
    pub age_max: i32,
}

impl FormPolicy {
    /// Check that the policy describes a satisfiable set of limits.
    pub fn validated(self) -> Result<Self, PolicyError> {
        if self.age_min > self.age_max {
            return Err(PolicyError::InvertedAgeRange {
                min: self.age_min,
                max: self.age_max,
            });
        }
        if self.display_name_max_len == 0 {
            return Err(PolicyError::ZeroDisplayNameLimit);
        }
        Ok(self)
    }
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            display_name_max_len: DISPLAY_NAME_MAX_LEN,
            age_min: AGE_MIN,
            age_max: AGE_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let policy = FormPolicy::default();
        assert_eq!(policy.display_name_max_len, 50);
        assert_eq!(policy.age_min, 0);
        assert_eq!(policy.age_max, 150);
    }

    #[test]
    fn test_validated_rejects_inverted_range() {
        let policy = FormPolicy {
            age_min: 18,
            age_max: 10,
            ..FormPolicy::default()
        };
        assert_eq!(
            policy.validated(),
            Err(PolicyError::InvertedAgeRange { min: 18, max: 10 })
        );
    }

    #[test]
    fn test_validated_rejects_zero_name_limit() {
        let policy = FormPolicy {
            display_name_max_len: 0,
            ..FormPolicy::default()
        };
        assert_eq!(policy.validated(), Err(PolicyError::ZeroDisplayNameLimit));
    }

    #[test]
    fn test_validated_accepts_single_value_range() {
        let policy = FormPolicy {
            age_min: 30,
            age_max: 30,
            ..FormPolicy::default()
        };
        assert_eq!(policy.validated(), Ok(policy));
    }
}
