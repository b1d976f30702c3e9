//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact fields.
///
/// Only one error is ever reported per validation: checks run in the order
/// name, phone, email and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming.
    EmptyName,

    /// The provided phone number does not match the phone grammar.
    InvalidPhone(String),

    /// The provided email address does not match the email grammar.
    InvalidEmail(String),

    /// The provided contact ID is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {} (use digits, +, -, () or spaces)",
                phone
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::EmptyId => write!(f, "Contact ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
