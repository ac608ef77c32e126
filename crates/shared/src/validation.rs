//! Common validation utilities and field limits.

use validator::{ValidationError, ValidationErrors};

/// Maximum length of a contact name (characters).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address (characters).
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Maximum length of a phone number (characters).
pub const MAX_PHONE_LENGTH: usize = 20;

/// Maximum length of a company name (characters).
pub const MAX_COMPANY_LENGTH: usize = 100;

/// Returns the value only if it is present and non-empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validates that `value` is at most `max` characters long.
pub fn validate_max_chars(
    value: &str,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() <= max {
        Ok(())
    } else {
        let mut err = ValidationError::new("length");
        err.message = Some(format!("{} must be at most {} characters", field, max).into());
        Err(err)
    }
}

/// Collapses validation errors into a single message.
///
/// Fields are visited in name order so the result is stable.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}
