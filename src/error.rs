//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::errors`].

use crate::domain::{ContactId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the persistence adapter.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The stored document exists but is not a valid contact collection
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    /// The stored document exists but could not be read
    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed; the previous file is unchanged
    #[error("Could not save data to {path}: {source}")]
    PersistFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by `ContactStore` operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input fields were rejected; nothing changed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact has the given ID; nothing changed
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    /// The in-memory change was applied but could not be saved
    #[error("Change applied in memory but not saved: {0}")]
    PersistFailure(#[source] PersistenceError),
}

/// Errors that can occur during CSV import and export.
#[derive(Error, Debug)]
pub enum TransferError {
    /// Export was requested for an empty collection
    #[error("No contacts to export")]
    NothingToExport,

    /// The export destination could not be written
    #[error("Export failed: {0}")]
    ExportFailure(#[source] std::io::Error),

    /// The import source could not be read or parsed; nothing was committed
    #[error("Import failed: {0}")]
    ImportFailure(#[source] csv::Error),

    /// The records were imported but the collection could not be saved
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with TransferError
pub type TransferResult<T> = Result<T, TransferError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl StoreError {
    /// Whether the error left the in-memory collection ahead of the saved document.
    pub fn is_unsaved_change(&self) -> bool {
        matches!(self, Self::PersistFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound(ContactId::new("abc").unwrap());
        assert_eq!(err.to_string(), "Contact not found: abc");

        let err = StoreError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = TransferError::NothingToExport;
        assert_eq!(err.to_string(), "No contacts to export");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: unknown level");
    }

    #[test]
    fn test_persist_failure_is_unsaved_change() {
        let err = StoreError::PersistFailure(PersistenceError::PersistFailure {
            path: PathBuf::from("contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(err.is_unsaved_change());
        assert!(err.to_string().contains("contacts.json"));
        assert!(!StoreError::from(ValidationError::EmptyName).is_unsaved_change());
    }
}
