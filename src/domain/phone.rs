//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading `+` or digit, then at least five digits, spaces, hyphens or parentheses.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+0-9][0-9 ()\-]{5,}$").expect("phone regex is valid"));

/// A type-safe wrapper for phone numbers.
///
/// The first character must be `+` or a digit, so `+1 (555) 0100` is
/// accepted and `(020) 7946 0000` is not. Letters and other punctuation are
/// rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("  +1 555-0100 ").unwrap();
/// assert_eq!(phone.as_str(), "+1 555-0100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from trimmed input, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the trimmed value does not
    /// match the phone grammar. An empty value is also rejected; optional
    /// phones are handled by the caller.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if !Self::is_valid(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(phone.to_string()))
    }

    /// Check a (trimmed) value against the phone grammar.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
