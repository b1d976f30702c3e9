//! Contact store.
//!
//! Owns the canonical in-memory collection and writes it through to a
//! [`ContactRepository`] after every mutation.

use crate::domain::{validate, ContactId};
use crate::error::{PersistenceError, StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use std::fmt;
use tracing::{debug, info, warn};

/// Non-fatal problem found while opening a store.
///
/// The store is still usable, but it started from an empty collection
/// instead of the stored one.
#[derive(Debug)]
pub struct LoadWarning {
    pub error: PersistenceError,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Starting with an empty contact list.", self.error)
    }
}

/// Outcome of a batch import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records created
    pub added: usize,
    /// Rows ignored because the name was blank
    pub skipped_blank: usize,
    /// Rows ignored because an equal (name, phone, email) already existed
    pub skipped_duplicate: usize,
}

/// In-memory contact collection with write-through persistence.
///
/// Mutating methods take `&mut self`, so two mutations can never interleave
/// on one store. Validation and not-found failures leave the collection
/// untouched. A failed save keeps the in-memory change, reports
/// `StoreError::PersistFailure`, and can be retried with [`ContactStore::sync`].
pub struct ContactStore {
    contacts: Vec<Contact>,
    repository: Box<dyn ContactRepository>,
    unsaved: bool,
}

impl ContactStore {
    /// Open a store over `repository`, loading the stored collection.
    ///
    /// Unusable stored data never fails construction: the store starts empty
    /// and the problem is returned as a [`LoadWarning`].
    pub fn open(repository: impl ContactRepository + 'static) -> (Self, Option<LoadWarning>) {
        Self::open_boxed(Box::new(repository))
    }

    /// Same as [`ContactStore::open`] for an already boxed repository.
    pub fn open_boxed(repository: Box<dyn ContactRepository>) -> (Self, Option<LoadWarning>) {
        let (contacts, warning) = match repository.load() {
            Ok(contacts) => {
                debug!(count = contacts.len(), "Contact store opened");
                (contacts, None)
            }
            Err(error) => {
                warn!(error = %error, "Stored contacts unusable, starting empty");
                (Vec::new(), Some(LoadWarning { error }))
            }
        };

        let store = Self {
            contacts,
            repository,
            unsaved: false,
        };
        (store, warning)
    }

    /// Create a contact from `draft`.
    ///
    /// Always creates a new record, even if an identical one exists.
    pub fn add(&mut self, draft: &ContactDraft) -> StoreResult<Contact> {
        validate(&draft.name, &draft.phone, &draft.email)?;

        let contact = Contact::from_draft(self.fresh_id(), draft);
        self.contacts.push(contact.clone());
        info!(id = %contact.id, "Contact added");

        self.persist()?;
        Ok(contact)
    }

    /// Replace every field of contact `id` except the id itself.
    pub fn update(&mut self, id: &ContactId, draft: &ContactDraft) -> StoreResult<Contact> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        validate(&draft.name, &draft.phone, &draft.email)?;

        let contact = &mut self.contacts[index];
        contact.apply(draft);
        let updated = contact.clone();
        info!(id = %id, "Contact updated");

        self.persist()?;
        Ok(updated)
    }

    /// Remove contact `id`. Returns the removed record.
    pub fn delete(&mut self, id: &ContactId) -> StoreResult<Contact> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let removed = self.contacts.remove(index);
        info!(id = %id, "Contact deleted");

        self.persist()?;
        Ok(removed)
    }

    /// Look up a contact by id.
    pub fn get(&self, id: &ContactId) -> StoreResult<&Contact> {
        self.contacts
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// All contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Insert a batch of drafts, skipping blank names and duplicates.
    ///
    /// A draft is a duplicate when a contact (already stored, or added earlier
    /// in this batch) has the same trimmed name, phone and email. The
    /// collection is saved once at the end.
    pub fn import_drafts<I>(&mut self, drafts: I) -> StoreResult<ImportSummary>
    where
        I: IntoIterator<Item = ContactDraft>,
    {
        let mut summary = ImportSummary::default();

        for draft in drafts {
            let draft = draft.normalized();
            if draft.name.is_empty() {
                summary.skipped_blank += 1;
                continue;
            }
            if self
                .contacts
                .iter()
                .any(|c| c.has_identity(&draft.name, &draft.phone, &draft.email))
            {
                summary.skipped_duplicate += 1;
                continue;
            }

            let contact = Contact::from_draft(self.fresh_id(), &draft);
            self.contacts.push(contact);
            summary.added += 1;
        }

        info!(
            added = summary.added,
            skipped_blank = summary.skipped_blank,
            skipped_duplicate = summary.skipped_duplicate,
            "Contacts imported"
        );

        if summary.added > 0 || self.unsaved {
            self.persist()?;
        }
        Ok(summary)
    }

    /// Save the current collection, e.g. to retry after a `PersistFailure`.
    pub fn sync(&mut self) -> StoreResult<()> {
        self.persist()
    }

    /// Whether the in-memory collection is ahead of the stored document.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn persist(&mut self) -> StoreResult<()> {
        match self.repository.save(&self.contacts) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(error) => {
                self.unsaved = true;
                warn!(error = %error, "Saving contacts failed, memory is ahead of storage");
                Err(StoreError::PersistFailure(error))
            }
        }
    }

    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    fn fresh_id(&self) -> ContactId {
        loop {
            let id = ContactId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts.len())
            .field("unsaved", &self.unsaved)
            .finish()
    }
}
