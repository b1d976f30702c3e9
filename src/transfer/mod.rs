//! CSV import and export.
//!
//! The tabular format is comma-delimited UTF-8 with a
//! `Name,Phone,Email,Address` header and RFC 4180 quoting.

pub mod export;
pub mod import;

pub use export::{export_to, export_to_path, HEADER};
pub use import::{import_from, import_from_path, read_drafts};
