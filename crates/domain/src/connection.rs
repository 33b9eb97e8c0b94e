//! Connections and the keys that pair them with devices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

const SEPARATOR: &str = "::";

/// Key of the `CONNECTION_DEVICE_STATUS` namespace: `<connection>::<device id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionDeviceKey {
    pub connection: String,
    pub device_id: String,
}

impl ConnectionDeviceKey {
    #[must_use]
    pub fn new(connection: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            device_id: device_id.into(),
        }
    }
}

impl fmt::Display for ConnectionDeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.connection, self.device_id)
    }
}

impl FromStr for ConnectionDeviceKey {
    type Err = ValidationError;

    /// Splits on the first `::`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once(SEPARATOR)
            .map(|(connection, device_id)| Self::new(connection, device_id))
            .ok_or_else(|| ValidationError::MalformedConnectionDeviceKey(s.to_string()))
    }
}

/// One row of the device → connection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceConnection {
    pub device_id: String,
    /// `None` when the key vanished between listing and fetching.
    pub connection: Option<String>,
}
