use serde::Serialize;

use crate::fields::{Age, DisplayName, Email};

/// A form whose every field passed validation in the same pass.
///
/// Only produced by a successful submit; never stored in the form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRecord {
    pub email: Email,
    pub display_name: DisplayName,
    pub age: Age,
}
