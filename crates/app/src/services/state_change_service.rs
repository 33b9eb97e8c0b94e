//! State change service — the write path that fills every namespace.
//!
//! The read services only ever see what this service (or an external
//! collector doing the same thing) has put into the store.

use viewr_domain::connection::ConnectionDeviceKey;
use viewr_domain::device::{DeviceDetails, StateChange};
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

/// Records [`StateChange`]s into the key-value namespaces.
pub struct StateChangeService<S> {
    store: S,
}

impl<S: KeyValueStore> StateChangeService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fan one state change out to the namespaces.
    ///
    /// - `DEVICE_STATUS[id]` gets the JSON-encoded new state
    /// - with a connection, `CONNECTION_DEVICE_STATUS[<connection>::<id>]`
    ///   gets the same value and `DEVICE_ID_CONNECTION_MAPPING[id]` the
    ///   connection
    /// - `DEVICE_DETAILS[id]` is created with default details if absent
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::Validation`] if the change is invalid,
    /// [`ViewrError::Encoding`] if a value cannot be serialized, or a storage
    /// error from the first failing write.
    #[tracing::instrument(skip(self, change), fields(device_id = %change.id, new_state = %change.new_state))]
    pub async fn record(&self, change: &StateChange) -> Result<(), ViewrError> {
        change.validate()?;
        let state = encode(&change.new_state)?;

        self.store
            .put(Namespace::DeviceStatus, &change.id, &state)
            .await?;

        if let Some(connection) = &change.connection {
            let key = ConnectionDeviceKey::new(connection.as_str(), change.id.as_str());
            self.store
                .put(Namespace::ConnectionDeviceStatus, &key.to_string(), &state)
                .await?;
            self.store
                .put(Namespace::DeviceIdConnectionMapping, &change.id, connection)
                .await?;
        }

        if self
            .store
            .get(Namespace::DeviceDetails, &change.id)
            .await?
            .is_none()
        {
            tracing::info!("new device, creating default details");
            let details = encode(&DeviceDetails::default())?;
            self.store
                .put(Namespace::DeviceDetails, &change.id, &details)
                .await?;
        }

        Ok(())
    }

    /// Record each change in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first change that could not be recorded.
    pub async fn record_all(&self, changes: &[StateChange]) -> Result<(), ViewrError> {
        for change in changes {
            self.record(change).await?;
        }
        tracing::info!(count = changes.len(), "recorded state changes");
        Ok(())
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, ViewrError> {
    Ok(serde_json::to_string(value)?)
}
