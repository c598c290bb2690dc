//! Preference store
//!
//! Reads and writes small settings records through an injected
//! [`KeyValueStore`]. The read path never fails: a missing, malformed or
//! unreadable entry degrades to the record's default. The write path does not
//! absorb backend errors.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{DisplayPreferences, UiSettings};
use crate::storage::{KeyValueStore, StorageResult};
use crate::util::compact_text;

/// A settings record persisted under a fixed key
pub trait Preference: Serialize + DeserializeOwned + Default {
    /// Storage key for this record
    const KEY: &'static str;
}

impl Preference for UiSettings {
    const KEY: &'static str = "ui-settings";
}

impl Preference for DisplayPreferences {
    const KEY: &'static str = "display-preferences";
}

/// Result of reading a preference, with the reason when nothing usable was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<P> {
    /// A stored value was parsed
    Loaded(P),
    /// No entry exists under the key
    NotFound,
    /// The stored entry does not parse as `P`
    Malformed(String),
    /// The backend failed to read
    Unreadable(String),
    /// No persistent storage in this execution context
    Unavailable,
}

impl<P: Default> LoadOutcome<P> {
    /// The loaded value, or `P::default()` for every other outcome
    pub fn into_value(self) -> P {
        match self {
            Self::Loaded(value) => value,
            Self::NotFound | Self::Malformed(_) | Self::Unreadable(_) | Self::Unavailable => {
                P::default()
            }
        }
    }
}

impl<P> LoadOutcome<P> {
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Preference store over an optional storage backend.
///
/// `None` models an execution context with no persistent storage (for
/// example server-side rendering): reads return defaults and writes are
/// dropped without touching anything.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: Option<S>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a store writing through `storage`
    pub const fn new(storage: S) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Create a store for a context without persistent storage
    pub const fn headless() -> Self {
        Self { storage: None }
    }

    /// Whether a storage backend is attached
    pub const fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Read a preference, reporting why a stored value could not be used
    pub fn read<P: Preference>(&self) -> LoadOutcome<P> {
        let Some(storage) = self.storage.as_ref() else {
            return LoadOutcome::Unavailable;
        };

        let raw = match storage.get(P::KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::NotFound,
            Err(error) => return LoadOutcome::Unreadable(error.to_string()),
        };

        match serde_json::from_str::<P>(&raw) {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(error) => LoadOutcome::Malformed(compact_text(&error.to_string())),
        }
    }

    /// Load a preference, falling back to its default on any failure
    pub fn load<P: Preference>(&self) -> P {
        let outcome = self.read::<P>();
        match &outcome {
            LoadOutcome::Loaded(_) => {}
            LoadOutcome::Unavailable => {
                tracing::debug!(key = P::KEY, "No persistent storage, using defaults");
            }
            LoadOutcome::NotFound => {
                tracing::debug!(key = P::KEY, "No stored preference, using defaults");
            }
            LoadOutcome::Malformed(reason) => {
                tracing::warn!(key = P::KEY, %reason, "Stored preference is malformed, using defaults");
            }
            LoadOutcome::Unreadable(reason) => {
                tracing::warn!(key = P::KEY, %reason, "Failed to read preference, using defaults");
            }
        }
        outcome.into_value()
    }

    /// Persist a preference, replacing any previous value.
    ///
    /// A no-op when no storage is attached. Backend failures are returned.
    pub fn save<P: Preference>(&self, value: &P) -> StorageResult<()> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };

        let serialized = serde_json::to_string(value)?;
        storage.set(P::KEY, &serialized)?;
        tracing::debug!(key = P::KEY, "Saved preference");
        Ok(())
    }

    /// Remove a stored preference so the next load returns the default
    pub fn reset<P: Preference>(&self) -> StorageResult<()> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };

        storage.remove(P::KEY)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::{Layout, Theme};
    use crate::storage::{MemoryStore, StorageError};
    use pretty_assertions::assert_eq;

    /// Backend that fails every call and counts how often it was touched
    #[derive(Default)]
    struct FailingStore {
        calls: Cell<usize>,
    }

    impl FailingStore {
        fn fail(&self) -> StorageError {
            self.calls.set(self.calls.get() + 1);
            StorageError::Io(std::io::Error::other("quota exceeded"))
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(self.fail())
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(self.fail())
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(self.fail())
        }
    }

    #[test]
    fn save_then_load_returns_saved_settings() {
        let store = PreferenceStore::new(MemoryStore::new());
        let settings = UiSettings {
            theme: Theme::Neon,
            layout: Layout::Sidebar,
        };

        store.save(&settings).unwrap();

        assert_eq!(store.load::<UiSettings>(), settings);
    }

    #[test]
    fn every_combination_survives_save_and_load() {
        let store = PreferenceStore::new(MemoryStore::new());
        for theme in Theme::ALL {
            for layout in Layout::ALL {
                let settings = UiSettings { theme, layout };
                store.save(&settings).unwrap();
                assert_eq!(store.load::<UiSettings>(), settings);
            }
        }
    }

    #[test]
    fn fresh_storage_loads_defaults() {
        let store = PreferenceStore::new(MemoryStore::new());
        assert_eq!(store.read::<UiSettings>(), LoadOutcome::NotFound);
        assert_eq!(
            store.load::<UiSettings>(),
            UiSettings {
                theme: Theme::Default,
                layout: Layout::Tabs,
            }
        );
    }

    #[test]
    fn non_json_entry_is_malformed_and_loads_defaults() {
        let backend = MemoryStore::new();
        backend.set(UiSettings::KEY, "not json").unwrap();
        let store = PreferenceStore::new(&backend);

        assert!(matches!(
            store.read::<UiSettings>(),
            LoadOutcome::Malformed(_)
        ));
        assert_eq!(store.load::<UiSettings>(), UiSettings::default());
    }

    #[test]
    fn out_of_enumeration_value_is_malformed() {
        let backend = MemoryStore::new();
        backend
            .set(UiSettings::KEY, r#"{"theme":"purple","layout":"tabs"}"#)
            .unwrap();
        let store = PreferenceStore::new(&backend);

        assert!(matches!(
            store.read::<UiSettings>(),
            LoadOutcome::Malformed(_)
        ));
        assert_eq!(store.load::<UiSettings>(), UiSettings::default());
    }

    #[test]
    fn partial_record_is_malformed() {
        let backend = MemoryStore::new();
        backend.set(UiSettings::KEY, r#"{"theme":"retro"}"#).unwrap();
        let store = PreferenceStore::new(&backend);

        assert!(matches!(
            store.read::<UiSettings>(),
            LoadOutcome::Malformed(_)
        ));
    }

    #[test]
    fn headless_store_returns_defaults_without_touching_storage() {
        let store = PreferenceStore::<MemoryStore>::headless();
        assert!(!store.is_available());
        assert_eq!(store.read::<UiSettings>(), LoadOutcome::Unavailable);
        assert_eq!(store.load::<UiSettings>(), UiSettings::default());
    }

    #[test]
    fn headless_save_and_reset_are_noops() {
        let store = PreferenceStore::<FailingStore>::headless();
        let settings = UiSettings {
            theme: Theme::Cartoon,
            layout: Layout::Topbar,
        };
        store.save(&settings).unwrap();
        store.reset::<UiSettings>().unwrap();
        assert_eq!(store.load::<UiSettings>(), UiSettings::default());
    }

    #[test]
    fn read_failure_is_unreadable_and_loads_defaults() {
        let backend = FailingStore::default();
        let store = PreferenceStore::new(&backend);

        assert!(matches!(
            store.read::<UiSettings>(),
            LoadOutcome::Unreadable(_)
        ));
        assert_eq!(store.load::<UiSettings>(), UiSettings::default());
        assert_eq!(backend.calls.get(), 2);
    }

    #[test]
    fn write_failure_propagates_to_caller() {
        let store = PreferenceStore::new(FailingStore::default());
        let error = store.save(&UiSettings::default()).unwrap_err();
        assert!(error.to_string().contains("quota exceeded"));
    }

    #[test]
    fn reset_restores_defaults() {
        let store = PreferenceStore::new(MemoryStore::new());
        store
            .save(&UiSettings {
                theme: Theme::Retro,
                layout: Layout::Sidebar,
            })
            .unwrap();

        store.reset::<UiSettings>().unwrap();

        assert_eq!(store.read::<UiSettings>(), LoadOutcome::NotFound);
    }

    #[test]
    fn records_are_stored_under_separate_keys() {
        let backend = MemoryStore::new();
        let store = PreferenceStore::new(&backend);
        let display = DisplayPreferences {
            privacy_blur: true,
            sound_enabled: false,
        };

        store.save(&display).unwrap();

        assert_eq!(store.load::<DisplayPreferences>(), display);
        assert_eq!(store.read::<UiSettings>(), LoadOutcome::NotFound);
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn load_outcome_into_value_defaults_on_failure() {
        assert_eq!(
            LoadOutcome::<UiSettings>::Malformed("bad".into()).into_value(),
            UiSettings::default()
        );
        assert!(LoadOutcome::Loaded(UiSettings::default()).is_loaded());
        assert!(!LoadOutcome::<UiSettings>::NotFound.is_loaded());
    }
}
