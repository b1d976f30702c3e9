use contact_book::error::{PersistenceError, PersistenceResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the "durable" collection in memory, tracks method calls, and can
/// be told to fail loads or saves. Clones share state, so a test can keep a
/// handle after moving one into a store.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    stored: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    corrupt: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = contacts;
        repo
    }

    /// Make every `load` report corrupt data.
    pub fn corrupt(self) -> Self {
        *self.corrupt.lock().unwrap() = true;
        self
    }

    /// Make subsequent `save` calls fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Snapshot of what was last saved successfully.
    pub fn stored(&self) -> Vec<Contact> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> PersistenceResult<Vec<Contact>> {
        self.track_call("load");

        if *self.corrupt.lock().unwrap() {
            return Err(PersistenceError::CorruptData {
                path: PathBuf::from("mock.json"),
                reason: "expected value at line 1 column 1".to_string(),
            });
        }
        Ok(self.stored())
    }

    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(PersistenceError::PersistFailure {
                path: PathBuf::from("mock.json"),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        *self.stored.lock().unwrap() = contacts.to_vec();
        Ok(())
    }
}
