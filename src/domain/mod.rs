//! Domain value objects and validation.
//!
//! This module contains type-safe wrappers for contact IDs, email addresses
//! and phone numbers, plus the [`validate`] function that every write path
//! runs before touching the collection.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;
pub mod validation;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use validation::validate;
