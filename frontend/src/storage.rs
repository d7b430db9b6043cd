use common::store::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage). Reads then miss and writes are dropped.
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage is unavailable, preferences will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.inner {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not persist {key}");
            }
        }
    }
}
