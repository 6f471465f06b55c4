//! Helpers that turn input problems into validation errors.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use estatehub_core::error::AppError;

/// Run derived validation rules, reporting the first failure.
pub fn validate(input: &impl Validate) -> Result<(), AppError> {
    input.validate().map_err(|errors| AppError::validation(first_message(&errors)))
}

/// The message of the first failing rule, walking fields in name order.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(error) = list.first() {
                    return match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid"),
                    };
                }
            }
            ValidationErrorsKind::Struct(nested) => return first_message(nested),
            ValidationErrorsKind::List(items) => {
                if let Some(nested) = items.values().next() {
                    return first_message(nested);
                }
            }
        }
    }
    "Invalid input".to_string()
}

/// Present, non-blank text, or `"<field> is required"`.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Build a rule failure carrying a fixed message.
pub fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
