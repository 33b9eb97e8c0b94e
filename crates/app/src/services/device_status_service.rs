//! Device status service — reads `DEVICE_STATUS`.

use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

const NAMESPACE: Namespace = Namespace::DeviceStatus;

/// Lookups over the device status namespace.
pub struct DeviceStatusService<S> {
    store: S,
}

impl<S: KeyValueStore> DeviceStatusService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Status last recorded for `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::MissingIdentifier`] for an empty id,
    /// [`ViewrError::NotFound`] when no (or an empty) value is stored, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_status(&self, device_id: &str) -> Result<String, ViewrError> {
        super::lookup(&self.store, NAMESPACE, device_id).await
    }

    /// Every device id with a recorded status, in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_keys(&self) -> Result<Vec<String>, ViewrError> {
        self.store.list(NAMESPACE).await
    }

    /// Same as [`list_keys`](Self::list_keys), but writes the keys to the log.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn dump_keys(&self) -> Result<Vec<String>, ViewrError> {
        let keys = self.store.list(NAMESPACE).await?;
        tracing::info!(count = keys.len(), "Devices:");
        tracing::info!(?keys);
        Ok(keys)
    }
}
