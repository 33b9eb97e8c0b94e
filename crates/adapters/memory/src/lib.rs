//! # viewr-adapter-memory
//!
//! Process-local [`KeyValueStore`] for demos and tests. Nothing survives a
//! restart.
//!
//! Keys are kept in a `BTreeMap` per namespace so `list` returns them in the
//! same byte order as the `SQLite` adapter.
//!
//! ## Dependency rule
//!
//! Depends on `viewr-app` (port trait) and `viewr-domain` only.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use viewr_app::ports::KeyValueStore;
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

type Namespaces = HashMap<Namespace, BTreeMap<String, String>>;

/// Shared in-memory store. Clones share the same entries.
#[derive(Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<RwLock<Namespaces>>,
}

impl InMemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `(namespace, key, value)` triples.
    #[must_use]
    pub fn with_entries<'a>(
        entries: impl IntoIterator<Item = (Namespace, &'a str, &'a str)>,
    ) -> Self {
        let store = Self::new();
        {
            let mut map = store.write();
            for (namespace, key, value) in entries {
                map.entry(namespace)
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Namespaces> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Namespaces> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, ViewrError>> + Send {
        let value = self
            .read()
            .get(&namespace)
            .and_then(|entries| entries.get(key))
            .cloned();
        async { Ok(value) }
    }

    fn list(
        &self,
        namespace: Namespace,
    ) -> impl Future<Output = Result<Vec<String>, ViewrError>> + Send {
        let keys: Vec<String> = self
            .read()
            .get(&namespace)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        async { Ok(keys) }
    }

    fn put(
        &self,
        namespace: Namespace,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), ViewrError>> + Send {
        self.write()
            .entry(namespace)
            .or_default()
            .insert(key.to_string(), value.to_string());
        async { Ok(()) }
    }
}
