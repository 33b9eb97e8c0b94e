//! Key-value namespaces and how their values are relayed over HTTP.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One of the four flat, string-keyed namespaces the handlers read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `<connection>::<device id>` → status payload.
    ConnectionDeviceStatus,
    /// device id → connection descriptor.
    DeviceIdConnectionMapping,
    /// device id → detail payload.
    DeviceDetails,
    /// device id → status payload.
    DeviceStatus,
}

impl Namespace {
    /// The binding name the namespace is known by in storage.
    #[must_use]
    pub fn binding(self) -> &'static str {
        match self {
            Self::ConnectionDeviceStatus => "CONNECTION_DEVICE_STATUS",
            Self::DeviceIdConnectionMapping => "DEVICE_ID_CONNECTION_MAPPING",
            Self::DeviceDetails => "DEVICE_DETAILS",
            Self::DeviceStatus => "DEVICE_STATUS",
        }
    }

    /// How a found value from this namespace is written into a response body.
    #[must_use]
    pub fn encoding(self) -> ValueEncoding {
        match self {
            Self::DeviceIdConnectionMapping => ValueEncoding::Json,
            Self::ConnectionDeviceStatus | Self::DeviceDetails | Self::DeviceStatus => {
                ValueEncoding::Raw
            }
        }
    }

    /// Plain-text body returned when a lookup in this namespace has no id.
    #[must_use]
    pub fn missing_id_message(self) -> &'static str {
        match self {
            Self::DeviceDetails => "Device with that id was not found",
            _ => "Not found",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding())
    }
}

/// Response body encoding for a found value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueEncoding {
    /// The stored string is the body, as `text/plain`.
    Raw,
    /// The stored string is serialized as a JSON string.
    Json,
}

/// What `DeviceDetailsByID` answers when the store has no value for the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailsMissPolicy {
    /// `200` with an empty body.
    #[default]
    EmptyOk,
    /// `404` like every other lookup.
    NotFound,
}

impl FromStr for DetailsMissPolicy {
    type Err = UnknownDetailsMissPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty_ok" => Ok(Self::EmptyOk),
            "not_found" => Ok(Self::NotFound),
            other => Err(UnknownDetailsMissPolicy(other.to_string())),
        }
    }
}

/// Returned when parsing an unrecognised [`DetailsMissPolicy`].
#[derive(Debug, thiserror::Error)]
#[error("unknown details miss policy {0:?} (expected `empty_ok` or `not_found`)")]
pub struct UnknownDetailsMissPolicy(pub String);
