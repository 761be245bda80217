//! Visit service — read, increment, and rewrite the visit counter.

use folio_domain::error::StoreError;
use folio_domain::visits;

use crate::ports::PreferenceStore;

/// Storage key for the persisted visit count.
pub const VISITS_KEY: &str = "folio-visits";

/// Application service for the visitor counter.
pub struct VisitService<S> {
    store: S,
}

impl<S: PreferenceStore> VisitService<S> {
    /// Create a new service backed by the given preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record one visit: read the stored count (absent or invalid reads as
    /// zero), increment, persist, and return the new count.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read or written;
    /// the caller displays a placeholder instead of a number.
    pub fn record(&self) -> Result<u64, StoreError> {
        let current = visits::parse_count(self.store.get(VISITS_KEY)?.as_deref());
        let next = visits::next_count(current);
        self.store.set(VISITS_KEY, &next.to_string())?;
        Ok(next)
    }
}
