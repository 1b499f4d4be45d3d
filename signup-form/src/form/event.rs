use crate::fields::Field;

/// Error returned when typed text cannot become an age edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeInputError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
}

/// A new raw value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    Email(String),
    DisplayName(String),
    /// `None` clears the field.
    Age(Option<i32>),
}

impl EditEvent {
    /// The field this edit targets.
    pub fn field(&self) -> Field {
        match self {
            Self::Email(_) => Field::Email,
            Self::DisplayName(_) => Field::DisplayName,
            Self::Age(_) => Field::Age,
        }
    }

    /// Build an age edit from typed text.
    ///
    /// Blank text clears the field. Anything that is not an integer is
    /// rejected here, so the age validator only ever sees numbers.
    pub fn age_from_text(text: &str) -> Result<Self, AgeInputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::Age(None));
        }
        trimmed
            .parse::<i32>()
            .map(|age| Self::Age(Some(age)))
            .map_err(|_| AgeInputError::NotANumber(trimmed.to_string()))
    }
}

/// Everything the rendering layer can tell the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit(EditEvent),
    Blur(Field),
    Submit,
    Reset,
}

impl From<EditEvent> for FormEvent {
    fn from(edit: EditEvent) -> Self {
        Self::Edit(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_from_text() {
        assert_eq!(EditEvent::age_from_text("25"), Ok(EditEvent::Age(Some(25))));
        assert_eq!(EditEvent::age_from_text(" -3 "), Ok(EditEvent::Age(Some(-3))));
        assert_eq!(EditEvent::age_from_text(""), Ok(EditEvent::Age(None)));
        assert_eq!(EditEvent::age_from_text("   "), Ok(EditEvent::Age(None)));
    }

    #[test]
    fn test_age_from_text_rejects_non_numeric() {
        assert_eq!(
            EditEvent::age_from_text("twelve"),
            Err(AgeInputError::NotANumber("twelve".to_string()))
        );
        assert!(EditEvent::age_from_text("12.5").is_err());
        assert!(EditEvent::age_from_text("99999999999").is_err());
    }

    #[test]
    fn test_edit_targets_field() {
        assert_eq!(EditEvent::Email(String::new()).field(), Field::Email);
        assert_eq!(EditEvent::DisplayName(String::new()).field(), Field::DisplayName);
        assert_eq!(EditEvent::Age(None).field(), Field::Age);
    }
}
