//! Contact book service layer.
//!
//! The narrow surface a presentation layer calls into. Every method is
//! synchronous and returns a definite outcome; confirmation prompts and
//! user feedback stay with the caller.

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{StoreResult, TransferResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::{ContactRepository, JsonFileRepository};
use crate::search;
use crate::services::contact_store::{ContactStore, ImportSummary, LoadWarning};
use crate::transfer;
use std::path::Path;

/// Facade over a [`ContactStore`] exposing the collaborator operations.
#[derive(Debug)]
pub struct ContactBook {
    store: ContactStore,
}

impl ContactBook {
    /// Open the JSON document named by `config`.
    ///
    /// A corrupt document is reported as a warning, not an error.
    pub fn open(config: &Config) -> (Self, Option<LoadWarning>) {
        Self::with_repository(JsonFileRepository::new(&config.data_file))
    }

    /// Open a book over any repository.
    pub fn with_repository(
        repository: impl ContactRepository + 'static,
    ) -> (Self, Option<LoadWarning>) {
        let (store, warning) = ContactStore::open(repository);
        (Self { store }, warning)
    }

    /// Contacts in insertion order, filtered by `query` when one is given.
    pub fn list_contacts(&self, query: Option<&str>) -> Vec<Contact> {
        let contacts = self.store.list();
        match query {
            Some(query) => search::filter(contacts, query).into_iter().cloned().collect(),
            None => contacts.to_vec(),
        }
    }

    pub fn get_contact(&self, id: &ContactId) -> StoreResult<Contact> {
        self.store.get(id).cloned()
    }

    pub fn add_contact(&mut self, draft: &ContactDraft) -> StoreResult<Contact> {
        self.store.add(draft)
    }

    pub fn update_contact(&mut self, id: &ContactId, draft: &ContactDraft) -> StoreResult<Contact> {
        self.store.update(id, draft)
    }

    /// Delete a contact. The caller is responsible for asking first.
    pub fn delete_contact(&mut self, id: &ContactId) -> StoreResult<()> {
        self.store.delete(id).map(|_| ())
    }

    /// Export every contact to a CSV file. Returns the number of rows written.
    pub fn export_contacts(&self, destination: impl AsRef<Path>) -> TransferResult<usize> {
        transfer::export_to_path(destination, self.store.list())
    }

    /// Import contacts from a CSV file.
    pub fn import_contacts(&mut self, source: impl AsRef<Path>) -> TransferResult<ImportSummary> {
        transfer::import_from_path(&mut self.store, source)
    }

    /// Retry saving after a failed write.
    pub fn sync(&mut self) -> StoreResult<()> {
        self.store.sync()
    }

    /// `Showing {shown} / {total}` for the current query.
    pub fn status_line(&self, query: Option<&str>) -> String {
        let total = self.store.len();
        let shown = match query {
            Some(query) => search::filter(self.store.list(), query).len(),
            None => total,
        };
        format!("Showing {shown} / {total}")
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }
}
