//! `localStorage`-backed implementation of the shell's key/value store.

use shell::storage::{KeyValueStore, StorageError};

/// Zero-sized handle to `window.localStorage`; looked up on every call so it
/// stays `Send + Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_owned())),
        Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            // Browsers raise QuotaExceededError as the only write failure.
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::QuotaExceeded { key: key.to_owned(), bytes: key.len() + value.len() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }
}
