//! Substring filter over the contact collection.

use crate::models::Contact;
use tracing::debug;

/// Normalize a raw query: trim and lower-case.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `contact` matches an already normalized query.
///
/// The query is matched against the lower-cased `name phone email address`
/// join, so a match may span two fields.
pub fn matches(contact: &Contact, normalized_query: &str) -> bool {
    normalized_query.is_empty()
        || contact
            .searchable_text()
            .to_lowercase()
            .contains(normalized_query)
}

/// Return the contacts matching `query`, in input order.
///
/// An empty (or whitespace-only) query returns every contact.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = normalize_query(query);
    if query.is_empty() {
        return contacts.iter().collect();
    }

    let results: Vec<&Contact> = contacts.iter().filter(|c| matches(c, &query)).collect();
    debug!(
        query = %query,
        matched = results.len(),
        total = contacts.len(),
        "Filtered contacts"
    );
    results
}
