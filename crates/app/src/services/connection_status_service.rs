//! Connection status service — reads `CONNECTION_DEVICE_STATUS`.

use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

const NAMESPACE: Namespace = Namespace::ConnectionDeviceStatus;

/// Lookups over the connection-device status namespace.
pub struct ConnectionStatusService<S> {
    store: S,
}

impl<S: KeyValueStore> ConnectionStatusService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Status recorded for one `<connection>::<device id>` key.
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::MissingIdentifier`] for an empty id,
    /// [`ViewrError::NotFound`] when no (or an empty) value is stored, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_status(&self, id: &str) -> Result<String, ViewrError> {
        super::lookup(&self.store, NAMESPACE, id).await
    }

    /// Every connection-device key, in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_keys(&self) -> Result<Vec<String>, ViewrError> {
        self.store.list(NAMESPACE).await
    }
}
