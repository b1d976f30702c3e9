//! Contact Book - a local contact-management core.
//!
//! Keeps a collection of contacts in memory, writes it through to a JSON
//! document after every change, and offers substring search plus CSV
//! import/export. Presentation is left to callers, which talk to
//! [`ContactBook`].
//!
//! # Architecture
//!
//! - **domain**: ID, phone and email value objects plus field validation
//! - **models**: the `Contact` record and `ContactDraft` input
//! - **repositories**: persistence trait and the JSON file implementation
//! - **services**: `ContactStore` (collection + invariants) and `ContactBook` (facade)
//! - **search**: case-insensitive substring filter
//! - **transfer**: CSV import with deduplication, CSV export
//! - **config**: settings from environment variables
//! - **error**: error types for every layer

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
pub mod transfer;

pub use config::Config;
pub use domain::{validate, ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, PersistenceError, StoreError, TransferError};
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactRepository, JsonFileRepository};
pub use services::{ContactBook, ContactStore, ImportSummary, LoadWarning};
