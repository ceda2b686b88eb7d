//! Preference store - owns the user's unit preferences.
//!
//! An explicitly constructed, dependency-injected service (no module
//! globals): built once at startup from the durable blob store and
//! passed by reference to consumers. Updates persist first, then notify
//! subscribers synchronously, so by the time `update` returns every
//! observer has seen the new units.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::units::{UnitPreference, UnitPreferenceUpdate};
use crate::ports::{PreferenceStorage, PreferenceStorageError};

/// Handle returned by `subscribe`; pass back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&UnitPreference) + Send + Sync>;

struct Inner {
    preference: UnitPreference,
    listeners: HashMap<SubscriptionId, Listener>,
    next_id: u64,
}

/// Stateful owner of the user's `UnitPreference`.
pub struct PreferenceStore {
    storage: Arc<dyn PreferenceStorage>,
    key: String,
    inner: RwLock<Inner>,
}

impl PreferenceStore {
    /// Loads the stored preference under `key`, falling back to
    /// `defaults` when nothing is stored. A blob that no longer parses
    /// is treated as absent.
    ///
    /// # Errors
    ///
    /// `PreferenceStorageError` if the blob store itself fails.
    pub fn load(
        storage: Arc<dyn PreferenceStorage>,
        key: impl Into<String>,
        defaults: UnitPreference,
    ) -> Result<Self, PreferenceStorageError> {
        let key = key.into();
        let preference = match storage.load(&key)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(preference) => preference,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "stored preference blob is unreadable, using defaults");
                    defaults
                }
            },
            None => defaults,
        };

        Ok(Self {
            storage,
            key,
            inner: RwLock::new(Inner {
                preference,
                listeners: HashMap::new(),
                next_id: 0,
            }),
        })
    }

    /// Current preference.
    pub fn get(&self) -> UnitPreference {
        self.read().preference
    }

    /// Merges the update into the current preference, persists the
    /// result, and notifies every subscriber before returning.
    ///
    /// # Errors
    ///
    /// `StorageFailed` if persisting fails; the in-memory preference is
    /// left unchanged and no subscriber is notified.
    pub fn update(&self, update: UnitPreferenceUpdate) -> Result<UnitPreference, DomainError> {
        let (merged, listeners) = {
            let mut inner = self.write();
            let merged = inner.preference.merged(&update);

            let blob = serde_json::to_string(&merged)
                .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
            self.storage
                .save(&self.key, &blob)
                .map_err(|e| DomainError::new(ErrorCode::StorageFailed, e.to_string()))?;

            inner.preference = merged;
            let listeners: Vec<Listener> = inner.listeners.values().cloned().collect();
            (merged, listeners)
        };

        tracing::debug!(
            key = %self.key,
            weight = %merged.weight,
            height = %merged.height,
            temperature = %merged.temperature,
            subscribers = listeners.len(),
            "unit preference updated"
        );

        // Notify outside the lock so listeners may call back into the
        // store.
        for listener in listeners {
            listener(&merged);
        }
        Ok(merged)
    }

    /// Registers a listener called synchronously after every update.
    pub fn subscribe(
        &self,
        listener: impl Fn(&UnitPreference) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut inner = self.write();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.insert(id, Arc::new(listener));
        id
    }

    /// Removes a listener. Returns false if the handle was already
    /// removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write().listeners.remove(&id).is_some()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.read().listeners.len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPreferenceStorage;
    use crate::domain::units::{HeightUnit, WeightUnit};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store_with(storage: Arc<InMemoryPreferenceStorage>) -> PreferenceStore {
        PreferenceStore::load(storage, "prefs:user-1", UnitPreference::default()).unwrap()
    }

    #[test]
    fn load_uses_defaults_when_nothing_is_stored() {
        let store = store_with(Arc::new(InMemoryPreferenceStorage::new()));
        assert_eq!(store.get(), UnitPreference::default());
    }

    #[test]
    fn load_reads_a_previously_persisted_preference() {
        let storage = Arc::new(InMemoryPreferenceStorage::new());
        store_with(Arc::clone(&storage))
            .update(UnitPreferenceUpdate::weight(WeightUnit::Lbs))
            .unwrap();

        let reloaded = store_with(storage);
        assert_eq!(reloaded.get().weight, WeightUnit::Lbs);
    }

    #[test]
    fn load_falls_back_to_defaults_on_corrupt_blob() {
        let storage = Arc::new(InMemoryPreferenceStorage::new());
        storage.seed("prefs:user-1", "not json");

        let store = store_with(storage);
        assert_eq!(store.get(), UnitPreference::default());
    }

    #[test]
    fn update_merges_only_provided_keys() {
        let store = store_with(Arc::new(InMemoryPreferenceStorage::new()));
        store
            .update(UnitPreferenceUpdate::height(HeightUnit::Ft))
            .unwrap();

        let pref = store.get();
        assert_eq!(pref.height, HeightUnit::Ft);
        assert_eq!(pref.weight, WeightUnit::Kg);
    }

    #[test]
    fn update_notifies_subscribers_synchronously() {
        let store = store_with(Arc::new(InMemoryPreferenceStorage::new()));
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        store.subscribe(move |pref| {
            assert_eq!(pref.weight, WeightUnit::Lbs);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store
            .update(UnitPreferenceUpdate::weight(WeightUnit::Lbs))
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let store = store_with(Arc::new(InMemoryPreferenceStorage::new()));
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store
            .update(UnitPreferenceUpdate::weight(WeightUnit::Lbs))
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listeners_may_read_the_store_during_notification() {
        let storage = Arc::new(InMemoryPreferenceStorage::new());
        let store = Arc::new(store_with(storage));

        let observer = Arc::clone(&store);
        store.subscribe(move |pref| {
            assert_eq!(observer.get(), *pref);
        });

        store
            .update(UnitPreferenceUpdate::height(HeightUnit::Ft))
            .unwrap();
    }
}
