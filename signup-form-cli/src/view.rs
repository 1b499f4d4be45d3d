//! Plain-text rendering of the form.

use std::fmt::Write;

use signup_form::fields::Field;
use signup_form::form::FormState;

/// Render every field's raw value and error text, one field per line.
pub fn render(state: &FormState) -> String {
    let width = Field::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in Field::ALL {
        let _ = write!(
            out,
            "{:<width$}  [{}]",
            field.label(),
            state.raw_text(field),
            width = width
        );
        if let Some(error) = state.error_text(field) {
            let _ = write!(out, "  ! {}", error);
        }
        out.push('\n');
    }
    out
}
