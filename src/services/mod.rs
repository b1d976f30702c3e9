//! Service layer for contact book operations.
//!
//! `ContactStore` owns the collection and its invariants; `ContactBook` is
//! the facade handed to presentation code.

pub mod contact_book;
pub mod contact_store;

pub use contact_book::ContactBook;
pub use contact_store::{ContactStore, ImportSummary, LoadWarning};
