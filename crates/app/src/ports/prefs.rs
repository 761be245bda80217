//! Preference storage port — a persistent string key/value store.

use folio_domain::error::StoreError;

/// Origin-scoped persistent preference storage (browser local storage in
/// production).
///
/// Implementations are synchronous: every feature reads and writes within
/// a single event-handler invocation, so no suspension point exists
/// between the read and the write.
pub trait PreferenceStore {
    /// Read a value, `None` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store is unavailable or
    /// rejects the write (e.g. quota exceeded).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
