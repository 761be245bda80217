//! Browser local-storage adapter for the `PreferenceStore` port.

use folio_app::ports::PreferenceStore;
use folio_domain::error::StoreError;

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Construction never fails; a missing or blocked storage area surfaces as
/// [`StoreError`] on each access so callers can degrade per feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn area() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::new("no window"))?
            .local_storage()
            .map_err(|_| StoreError::new("local storage blocked"))?
            .ok_or_else(|| StoreError::new("local storage disabled"))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::area()?
            .get_item(key)
            .map_err(|_| StoreError::new("local storage read failed"))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|_| StoreError::new("local storage write failed"))
    }
}
