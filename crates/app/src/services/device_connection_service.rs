//! Device connection service — reads `DEVICE_ID_CONNECTION_MAPPING`.

use viewr_domain::connection::DeviceConnection;
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

const NAMESPACE: Namespace = Namespace::DeviceIdConnectionMapping;

/// Lookups over the device → connection mapping namespace.
pub struct DeviceConnectionService<S> {
    store: S,
}

impl<S: KeyValueStore> DeviceConnectionService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Connection last used by `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::MissingIdentifier`] for an empty id,
    /// [`ViewrError::NotFound`] when no (or an empty) value is stored, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_connection(&self, device_id: &str) -> Result<String, ViewrError> {
        super::lookup(&self.store, NAMESPACE, device_id).await
    }

    /// One [`DeviceConnection`] per listed key, fetched one after another so
    /// the result keeps list order.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the first failing store call.
    #[tracing::instrument(skip(self))]
    pub async fn list_connections(&self) -> Result<Vec<DeviceConnection>, ViewrError> {
        let device_ids = self.store.list(NAMESPACE).await?;
        let mut mappings = Vec::with_capacity(device_ids.len());
        for device_id in device_ids {
            let connection = self.store.get(NAMESPACE, &device_id).await?;
            mappings.push(DeviceConnection {
                device_id,
                connection,
            });
        }
        tracing::debug!(count = mappings.len(), "listed device connections");
        Ok(mappings)
    }
}
