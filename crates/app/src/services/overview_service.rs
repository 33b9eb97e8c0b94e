//! Overview service — groups namespace contents for the dashboard pages.

use viewr_domain::connection::ConnectionDeviceKey;
use viewr_domain::device::DeviceState;
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

/// A device seen on a connection, with the state stored for that pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedDevice {
    pub device_id: String,
    /// `None` when the stored value is missing or not a known state.
    pub state: Option<DeviceState>,
}

/// Every device seen on one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGroup {
    pub connection: String,
    pub devices: Vec<ConnectedDevice>,
}

/// Device ids sharing one state. `state` is `None` for unreadable statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGroup {
    pub state: Option<DeviceState>,
    pub device_ids: Vec<String>,
}

/// Read-side groupings over `CONNECTION_DEVICE_STATUS` and `DEVICE_STATUS`.
pub struct OverviewService<S> {
    store: S,
}

impl<S: KeyValueStore> OverviewService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Connection-device keys grouped by connection, in list order.
    ///
    /// Keys without a `::` separator are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the first failing store call.
    #[tracing::instrument(skip(self))]
    pub async fn connections(&self) -> Result<Vec<ConnectionGroup>, ViewrError> {
        let keys = self.store.list(Namespace::ConnectionDeviceStatus).await?;
        let mut groups: Vec<ConnectionGroup> = Vec::new();

        for raw in keys {
            let key = match raw.parse::<ConnectionDeviceKey>() {
                Ok(key) => key,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping connection key");
                    continue;
                }
            };
            let value = self
                .store
                .get(Namespace::ConnectionDeviceStatus, &raw)
                .await?;
            let device = ConnectedDevice {
                device_id: key.device_id,
                state: value.as_deref().and_then(DeviceState::from_stored),
            };

            match groups
                .iter_mut()
                .find(|group| group.connection == key.connection)
            {
                Some(group) => group.devices.push(device),
                None => groups.push(ConnectionGroup {
                    connection: key.connection,
                    devices: vec![device],
                }),
            }
        }

        Ok(groups)
    }

    /// Device ids grouped by their stored status.
    ///
    /// One group per [`DeviceState`] in [`DeviceState::ALL`] order, even when
    /// empty, followed by a `None` group when some statuses are unreadable.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the first failing store call.
    #[tracing::instrument(skip(self))]
    pub async fn devices_by_state(&self) -> Result<Vec<StateGroup>, ViewrError> {
        let device_ids = self.store.list(Namespace::DeviceStatus).await?;
        let mut groups: Vec<StateGroup> = DeviceState::ALL
            .into_iter()
            .map(|state| StateGroup {
                state: Some(state),
                device_ids: Vec::new(),
            })
            .collect();
        let mut unknown = Vec::new();

        for device_id in device_ids {
            let value = self.store.get(Namespace::DeviceStatus, &device_id).await?;
            let state = value.as_deref().and_then(DeviceState::from_stored);
            match groups.iter_mut().find(|group| state.is_some() && group.state == state) {
                Some(group) => group.device_ids.push(device_id),
                None => unknown.push(device_id),
            }
        }

        if !unknown.is_empty() {
            groups.push(StateGroup {
                state: None,
                device_ids: unknown,
            });
        }
        Ok(groups)
    }
}
