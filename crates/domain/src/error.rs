//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ViewrError`]
//! via `#[from]` (or a manual `From` impl for boxed storage errors).

use crate::namespace::Namespace;

/// Top-level error type for viewr.
#[derive(Debug, thiserror::Error)]
pub enum ViewrError {
    /// The request did not carry the identifier a lookup in this namespace needs.
    #[error("missing identifier for {0}")]
    MissingIdentifier(Namespace),

    /// The store holds no value for the requested key.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A value could not be serialized for the store.
    #[error("failed to encode value")]
    Encoding(#[from] serde_json::Error),

    /// The backing key-value store failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A key that has no value in its namespace.
#[derive(Debug, thiserror::Error)]
#[error("{key} not found in {namespace}")]
pub struct NotFoundError {
    pub namespace: Namespace,
    pub key: String,
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("connection must not be empty")]
    EmptyConnection,

    #[error("connection-device key {0:?} has no `::` separator")]
    MalformedConnectionDeviceKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_not_found_into_viewr_error() {
        let err: ViewrError = NotFoundError {
            namespace: Namespace::DeviceStatus,
            key: "dev-1".to_string(),
        }
        .into();
        assert!(matches!(err, ViewrError::NotFound(_)));
        assert_eq!(err.to_string(), "dev-1 not found in DEVICE_STATUS");
    }

    #[test]
    fn should_name_namespace_when_identifier_missing() {
        let err = ViewrError::MissingIdentifier(Namespace::DeviceDetails);
        assert_eq!(err.to_string(), "missing identifier for DEVICE_DETAILS");
    }

    #[test]
    fn should_convert_validation_into_viewr_error() {
        let err: ViewrError = ValidationError::EmptyDeviceId.into();
        assert!(matches!(
            err,
            ViewrError::Validation(ValidationError::EmptyDeviceId)
        ));
    }

    #[test]
    fn should_convert_json_failure_into_encoding_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: ViewrError = json_err.into();
        assert!(matches!(err, ViewrError::Encoding(_)));
        assert_eq!(err.to_string(), "failed to encode value");
    }
}
