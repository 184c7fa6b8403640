/// Minimal key/value interface over the cache backing store.
///
/// The browser implementation wraps `window.localStorage`; tests inject an
/// in-memory map instead. All operations are infallible from the caller's
/// point of view: storage errors (quota, disabled storage) degrade to
/// "key absent" rather than surfacing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.raw() {
            let _ = storage.clear();
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::KeyValueStore;

    /// In-memory stand-in for local storage.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn keys(&self) -> Vec<String> {
            self.entries.borrow().keys().cloned().collect()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }

        fn clear(&self) {
            self.entries.borrow_mut().clear();
        }
    }
}
