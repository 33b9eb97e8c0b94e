//! Device state as reported by the upstream collector.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ViewrError};

/// Reporting state of a tracked device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    /// The device announced it stopped reporting.
    Stopped,
    /// Reports are arriving on time.
    Reporting,
    /// A report was expected but did not arrive.
    Offline,
}

impl DeviceState {
    /// Every state, in the order overview pages list them.
    pub const ALL: [Self; 3] = [Self::Reporting, Self::Offline, Self::Stopped];

    /// Read a state back from a stored status value.
    ///
    /// Accepts the JSON string the recorder writes (`"Reporting"`) as well as
    /// the bare variant name. Anything else yields `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        let name = value
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(value);
        Self::ALL.into_iter().find(|state| state.as_str() == name)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Reporting => "Reporting",
            Self::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transition of one device into a new [`DeviceState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub id: String,
    pub new_state: DeviceState,
    /// Connection the device reported over, e.g. `ssid=home`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
}

impl StateChange {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::Validation`] when the id is empty, or when a
    /// connection is present but empty.
    pub fn validate(&self) -> Result<(), ViewrError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyDeviceId.into());
        }
        if self.connection.as_deref() == Some("") {
            return Err(ValidationError::EmptyConnection.into());
        }
        Ok(())
    }
}

/// Editable details about a device, created empty on first sighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetails {
    pub friendly_name: Option<String>,
}
