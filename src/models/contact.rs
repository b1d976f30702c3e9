//! Contact model representing a person in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// Field order matches the persisted document: `id, name, phone, email,
/// address`. Optional text fields are empty strings rather than `None` so
/// the document shape stays stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned at creation and never changed
    pub id: ContactId,

    /// Display name, never empty
    pub name: String,

    /// Phone number, empty when unknown
    #[serde(default)]
    pub phone: String,

    /// Email address, empty when unknown
    #[serde(default)]
    pub email: String,

    /// Postal address, may span several lines
    #[serde(default)]
    pub address: String,
}

impl Contact {
    /// Build a contact from a draft, trimming every field.
    ///
    /// Does not validate; callers run [`crate::domain::validate`] first.
    pub fn from_draft(id: ContactId, draft: &ContactDraft) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        }
    }

    /// Replace every field except `id` with the (trimmed) draft values.
    pub fn apply(&mut self, draft: &ContactDraft) {
        let draft = draft.normalized();
        self.name = draft.name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.address = draft.address;
    }

    /// Text the search filter matches against: the four fields joined by
    /// single spaces, in display order.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.phone, self.email, self.address)
    }

    /// Whether this contact has the given (name, phone, email) dedup key.
    pub fn has_identity(&self, name: &str, phone: &str, email: &str) -> bool {
        self.name == name && self.phone == phone && self.email == email
    }

    /// Copy the editable fields back into a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

/// User-supplied contact fields, as typed (untrimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    /// Create a draft with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Copy with every field trimmed at the edges.
    ///
    /// The address keeps its inner line breaks.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}
