//! Search utilities for contacts.
//!
//! Searching is a plain case-insensitive substring filter over the in-memory
//! collection. It never touches persistence, so results always reflect the
//! snapshot the caller passes in.

pub mod filter;

pub use filter::{filter, matches, normalize_query};
