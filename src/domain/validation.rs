//! Field validation for contact input.

use super::email::EmailAddress;
use super::errors::ValidationError;
use super::phone::PhoneNumber;

/// Validate the user-editable contact fields.
///
/// Phone and email are optional: an empty (or whitespace-only) value is
/// accepted. Checks run name, phone, email; the first failure is returned.
pub fn validate(name: &str, phone: &str, email: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !phone.trim().is_empty() {
        PhoneNumber::new(phone)?;
    }

    if !email.trim().is_empty() {
        EmailAddress::new(email)?;
    }

    Ok(())
}
