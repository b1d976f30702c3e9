use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Contact repository backed by a single pretty-printed JSON document.
///
/// The document is an array of `{id, name, phone, email, address}` objects.
/// Saves go to a temporary file next to the target and are renamed over it,
/// so a crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the document at `path`.
    ///
    /// Nothing is touched on disk until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn corrupt(&self, reason: impl Into<String>) -> PersistenceError {
        PersistenceError::CorruptData {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn persist_failure(&self, source: io::Error) -> PersistenceError {
        PersistenceError::PersistFailure {
            path: self.path.clone(),
            source,
        }
    }

    /// Reject documents that parse but break the collection invariants.
    fn check_invariants(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        let mut seen = HashSet::with_capacity(contacts.len());
        for (index, contact) in contacts.iter().enumerate() {
            if contact.name.trim().is_empty() {
                return Err(self.corrupt(format!("contact at index {index} has an empty name")));
            }
            if !seen.insert(contact.id.as_str()) {
                return Err(self.corrupt(format!("duplicate contact id `{}`", contact.id)));
            }
        }
        Ok(())
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> PersistenceResult<Vec<Contact>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No contact document yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(self.corrupt("document is not valid UTF-8"));
            }
            Err(source) => {
                return Err(PersistenceError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let contacts: Vec<Contact> =
            serde_json::from_str(&text).map_err(|e| self.corrupt(e.to_string()))?;
        self.check_invariants(&contacts)?;

        debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Loaded contact document"
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| self.persist_failure(e))?;

        let mut json = serde_json::to_string_pretty(contacts)
            .map_err(|e| self.persist_failure(io::Error::from(e)))?;
        json.push('\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.persist_failure(e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| self.persist_failure(e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| self.persist_failure(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.persist_failure(e.error))?;

        debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Saved contact document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::models::ContactDraft;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::from_draft(ContactId::new(id).unwrap(), &ContactDraft::new(name))
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        let repo = JsonFileRepository::new("contacts.json");
        assert_eq!(repo.parent_dir(), Path::new("."));
    }

    #[test]
    fn test_check_invariants_rejects_duplicate_ids() {
        let repo = JsonFileRepository::new("contacts.json");
        let result = repo.check_invariants(&[contact("a", "Ada"), contact("a", "Alan")]);
        assert!(matches!(result, Err(PersistenceError::CorruptData { .. })));
    }

    #[test]
    fn test_check_invariants_rejects_blank_names() {
        let repo = JsonFileRepository::new("contacts.json");
        let mut blank = contact("b", "Ada");
        blank.name = "  ".to_string();
        let result = repo.check_invariants(&[contact("a", "Ada"), blank]);
        match result {
            Err(PersistenceError::CorruptData { reason, .. }) => {
                assert!(reason.contains("index 1"));
            }
            other => panic!("Expected CorruptData, got: {:?}", other),
        }
    }
}
