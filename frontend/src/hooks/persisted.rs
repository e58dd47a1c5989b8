use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_console as console;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage quota exceeded")]
    QuotaExceeded,

    #[error("Storage error: {0}")]
    Js(String),
}

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("Value could not be serialized")]
    Serialize(#[source] serde_json::Error),

    #[error("Value is stored in an unexpected format")]
    Deserialize(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Flat string to string store with synchronous access.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Window local storage.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    _private: (),
}

impl BrowserStorage {
    // Private browsing and sandboxed frames may refuse access
    pub fn open() -> Result<Self, StoreError> {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
            .is_some();

        match available {
            true => Ok(Self { _private: () }),
            false => Err(StoreError::Unavailable),
        }
    }
}

fn js_store_error(value: JsValue) -> StoreError {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) if String::from(error.name()) == "QuotaExceededError" => {
            StoreError::QuotaExceeded
        }
        Ok(error) => StoreError::Js(String::from(error.message())),
        Err(value) => StoreError::Js(format!("{:?}", value)),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw().get_item(key).map_err(js_store_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(js_store_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        LocalStorage::raw().remove_item(key).map_err(js_store_error)
    }
}

/// In-process store. Clones share entries, an optional quota limits the
/// total number of bytes held by keys and values.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Rc::default(),
            quota: Some(quota),
        }
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if self.used_without(key) + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Local storage when the browser grants it, otherwise a memory store that
/// lasts until reload.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            console::warn!(format!("{e}, falling back to memory"));
            Rc::new(MemoryStorage::default())
        }
    }
}

fn read<T, S>(store: &S, key: &str, default: &T) -> (T, Option<PersistError>)
where
    T: DeserializeOwned + Clone,
    S: KeyValueStore,
{
    let loaded = match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(PersistError::Deserialize),
        Ok(None) => Ok(None),
        Err(e) => Err(PersistError::Store(e)),
    };

    match loaded {
        Ok(Some(value)) => (value, None),
        Ok(None) => (default.clone(), None),
        Err(e) => (default.clone(), Some(e)),
    }
}

/// A value mirrored into a [`KeyValueStore`] as JSON.
///
/// The store is a cache: the in-memory value is what the running owner sees,
/// even when a write fails.
pub struct PersistedValue<T, S> {
    store: S,
    key: String,
    default: T,
    value: T,
    load_error: Option<PersistError>,
}

impl<T, S> PersistedValue<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    /// Never writes. A missing or unreadable entry yields `default`.
    pub fn load(store: S, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let (value, load_error) = read(&store, &key, &default);

        Self {
            store,
            key,
            default,
            value,
            load_error,
        }
    }

    /// Follows a new key, reading it the way [`load`](Self::load) does. The
    /// entry under the old key is left as it was.
    pub fn rekey(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key == self.key {
            return false;
        }

        let (value, load_error) = read(&self.store, &key, &self.default);
        self.key = key;
        self.value = value;
        self.load_error = load_error;
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Why the stored entry was ignored on load, if it was.
    pub fn load_error(&self) -> Option<&PersistError> {
        self.load_error.as_ref()
    }

    pub fn set(&mut self, value: T) -> Result<(), PersistError> {
        let serialized = serde_json::to_string(&value).map_err(PersistError::Serialize);
        self.value = value;

        self.store.set(&self.key, &serialized?)?;
        Ok(())
    }

    /// Forgets the stored entry and goes back to the default.
    pub fn clear(&mut self) -> Result<(), PersistError> {
        self.value = self.default.clone();
        self.store.remove(&self.key)?;
        Ok(())
    }
}

pub struct UsePersistedHandle<T> {
    value: UseStateHandle<T>,
    persisted: Rc<RefCell<PersistedValue<T, Rc<dyn KeyValueStore>>>>,
}

impl<T> Clone for UsePersistedHandle<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            persisted: Rc::clone(&self.persisted),
        }
    }
}

impl<T> UsePersistedHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Updates the component right away, a failed write is returned but does
    /// not roll the value back.
    pub fn set(&self, value: T) -> Result<(), PersistError> {
        let written = self.persisted.borrow_mut().set(value.clone());
        self.value.set(value);
        written
    }

    pub fn clear(&self) -> Result<(), PersistError> {
        let mut persisted = self.persisted.borrow_mut();
        let cleared = persisted.clear();
        self.value.set(persisted.get().clone());
        cleared
    }
}

fn warn_on_load_error<T, S>(persisted: &PersistedValue<T, S>)
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    if let Some(e) = persisted.load_error() {
        console::warn!(format!("ignoring stored {:?}: {e}", persisted.key()));
    }
}

/// State of the calling component, mirrored into local storage under `key`.
/// A new `key` is read on the next effect pass, the old entry stays put.
#[hook]
pub fn use_persisted<T>(key: AttrValue, default: T) -> UsePersistedHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let persisted = {
        let key = key.clone();
        use_mut_ref(move || {
            let persisted = PersistedValue::load(default_store(), key.to_string(), default);
            warn_on_load_error(&persisted);
            persisted
        })
    };

    let value = {
        let persisted = Rc::clone(&persisted);
        use_state(move || persisted.borrow().get().clone())
    };

    {
        let persisted = Rc::clone(&persisted);
        let value = value.clone();
        use_effect_with_deps(
            move |key: &AttrValue| {
                let mut persisted = persisted.borrow_mut();
                if persisted.rekey(key.to_string()) {
                    warn_on_load_error(&persisted);
                    value.set(persisted.get().clone());
                }
                || ()
            },
            key,
        );
    }

    UsePersistedHandle { value, persisted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_matches, assert_none, assert_ok, assert_some};
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct Preferences {
        name: String,
        font_size: u8,
        compact: bool,
        tags: Vec<String>,
    }

    #[test]
    fn never_written_key_yields_default_without_writing() {
        let store = MemoryStorage::default();

        let persisted = PersistedValue::load(store.clone(), "user-name", "guest".to_owned());

        assert_eq!(persisted.get(), "guest");
        assert_none!(persisted.load_error());
        assert_none!(assert_ok!(store.get("user-name")));
    }

    #[test]
    fn written_value_survives_a_reload() {
        let store = MemoryStorage::default();

        let mut persisted = PersistedValue::load(store.clone(), "user-name", String::new());
        assert_ok!(persisted.set("Ada".into()));

        let reloaded = PersistedValue::load(store, "user-name", String::new());
        assert_eq!(reloaded.get(), "Ada");
    }

    #[test]
    fn supported_values_round_trip_through_the_store() {
        fn round_trip<T>(value: T)
        where
            T: Serialize + DeserializeOwned + Clone + PartialEq + std::fmt::Debug,
        {
            let store = MemoryStorage::default();
            let mut persisted = PersistedValue::load(store.clone(), "k", value.clone());
            assert_ok!(persisted.set(value.clone()));
            assert_eq!(PersistedValue::load(store, "k", value.clone()).get(), &value);
        }

        round_trip(String::from("with \"quotes\" and \n newline"));
        round_trip(String::new());
        round_trip(-42i64);
        round_trip(3.25f64);
        round_trip(true);
        round_trip(Some(7u8));
        round_trip(Preferences {
            name: "Grace".into(),
            font_size: 14,
            compact: false,
            tags: vec!["a".into(), "b".into()],
        });
    }

    #[test]
    fn unparsable_entry_falls_back_to_default() {
        let store = MemoryStorage::default();
        assert_ok!(store.set("count", "not json"));

        let persisted = PersistedValue::load(store.clone(), "count", 0u32);

        assert_eq!(*persisted.get(), 0);
        assert_matches!(persisted.load_error(), Some(PersistError::Deserialize(_)));
        assert_eq!(assert_some!(assert_ok!(store.get("count"))), "not json");
    }

    #[test]
    fn failed_write_is_reported_and_value_still_updates() {
        let store = MemoryStorage::with_quota(16);
        let mut persisted = PersistedValue::load(store.clone(), "note", String::new());

        let error = assert_err!(persisted.set("far too long for the quota".into()));

        assert_matches!(error, PersistError::Store(StoreError::QuotaExceeded));
        assert_eq!(persisted.get(), "far too long for the quota");
        assert_none!(assert_ok!(store.get("note")));
    }

    #[test]
    fn quota_counts_replaced_entries_once() {
        let store = MemoryStorage::with_quota(10);

        assert_ok!(store.set("k", "12345678"));
        assert_ok!(store.set("k", "87654321"));
        assert_err!(store.set("j", "1"));
    }

    #[test]
    fn clear_removes_the_entry_and_restores_default() {
        let store = MemoryStorage::default();
        let mut persisted = PersistedValue::load(store.clone(), "search-term", String::new());
        assert_ok!(persisted.set("rust".into()));

        assert_ok!(persisted.clear());

        assert_eq!(persisted.get(), "");
        assert_none!(assert_ok!(store.get("search-term")));
    }

    #[test]
    fn rekey_reads_the_new_key_and_leaves_the_old_one() {
        let store = MemoryStorage::default();
        assert_ok!(store.set("bob.user-name", "\"Bob\""));

        let mut persisted = PersistedValue::load(store.clone(), "ada.user-name", String::new());
        assert_ok!(persisted.set("Ada".into()));

        assert!(persisted.rekey("bob.user-name"));
        assert_eq!(persisted.get(), "Bob");
        assert_eq!(persisted.key(), "bob.user-name");

        assert_ok!(persisted.set("Robert".into()));
        assert_eq!(assert_ok!(store.get("ada.user-name")).as_deref(), Some("\"Ada\""));
        assert_eq!(assert_ok!(store.get("bob.user-name")).as_deref(), Some("\"Robert\""));
    }

    #[test]
    fn rekey_to_a_fresh_key_falls_back_to_default() {
        let store = MemoryStorage::default();
        let mut persisted = PersistedValue::load(store.clone(), "search-term", String::new());
        assert_ok!(persisted.set("rust".into()));

        assert!(!persisted.rekey("search-term"));
        assert_eq!(persisted.get(), "rust");

        assert!(persisted.rekey("other.search-term"));
        assert_eq!(persisted.get(), "");
        assert_none!(persisted.load_error());
        assert_none!(assert_ok!(store.get("other.search-term")));
    }

    #[test]
    fn shared_store_keeps_keys_apart() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::default());

        let mut name = PersistedValue::load(Rc::clone(&store), "user-name", String::new());
        let mut term = PersistedValue::load(Rc::clone(&store), "search-term", String::new());
        assert_ok!(name.set("Ada".into()));
        assert_ok!(term.set("hooks".into()));

        assert_eq!(
            PersistedValue::load(Rc::clone(&store), "user-name", String::new()).get(),
            "Ada"
        );
        assert_eq!(
            PersistedValue::load(store, "search-term", String::new()).get(),
            "hooks"
        );
    }
}
