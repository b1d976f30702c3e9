use crate::error::PersistenceResult;
use crate::models::Contact;

/// Durable storage for the whole contact collection.
///
/// The store keeps the canonical collection in memory and hands the full
/// snapshot to `save` after every mutation, so implementations never see
/// partial updates. Swapping the storage format only means writing another
/// implementation of this trait.
pub trait ContactRepository {
    /// Read the stored collection.
    ///
    /// Returns an empty collection when nothing has been stored yet and
    /// `PersistenceError::CorruptData` when the stored document is unusable.
    fn load(&self) -> PersistenceResult<Vec<Contact>>;

    /// Replace the stored collection with `contacts`.
    ///
    /// Either the whole document is updated or `PersistFailure` is returned
    /// and the previous document is left as it was.
    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()>;
}
