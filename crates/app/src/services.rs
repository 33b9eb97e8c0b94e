//! Application services — use-case implementations.
//!
//! Each service struct accepts a [`KeyValueStore`] implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod connection_status_service;
pub mod device_connection_service;
pub mod device_details_service;
pub mod device_status_service;
pub mod overview_service;
pub mod state_change_service;

use viewr_domain::error::{NotFoundError, ViewrError};
use viewr_domain::namespace::Namespace;

use crate::ports::KeyValueStore;

/// Read `id` from `namespace`, treating an empty id or an empty value as absent.
///
/// An empty id short-circuits before the store is touched.
async fn lookup<S: KeyValueStore>(
    store: &S,
    namespace: Namespace,
    id: &str,
) -> Result<String, ViewrError> {
    if id.is_empty() {
        return Err(ViewrError::MissingIdentifier(namespace));
    }
    match store.get(namespace, id).await? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(NotFoundError {
            namespace,
            key: id.to_string(),
        }
        .into()),
    }
}
