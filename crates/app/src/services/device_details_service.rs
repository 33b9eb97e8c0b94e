//! Device details service — reads `DEVICE_DETAILS`.

use viewr_domain::error::ViewrError;
use viewr_domain::namespace::{DetailsMissPolicy, Namespace};

use crate::ports::KeyValueStore;

const NAMESPACE: Namespace = Namespace::DeviceDetails;

/// Lookups over the device details namespace.
///
/// Unlike the other lookups, a miss is only an error under
/// [`DetailsMissPolicy::NotFound`]; the default answers with an empty value.
pub struct DeviceDetailsService<S> {
    store: S,
    miss_policy: DetailsMissPolicy,
}

impl<S: KeyValueStore> DeviceDetailsService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S, miss_policy: DetailsMissPolicy) -> Self {
        Self { store, miss_policy }
    }

    /// Details stored for `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewrError::MissingIdentifier`] for an empty id, a storage
    /// error from the store, and [`ViewrError::NotFound`] on a miss when the
    /// policy is [`DetailsMissPolicy::NotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn get_details(&self, device_id: &str) -> Result<String, ViewrError> {
        match self.miss_policy {
            DetailsMissPolicy::NotFound => super::lookup(&self.store, NAMESPACE, device_id).await,
            DetailsMissPolicy::EmptyOk => {
                if device_id.is_empty() {
                    return Err(ViewrError::MissingIdentifier(NAMESPACE));
                }
                let details = self.store.get(NAMESPACE, device_id).await?;
                Ok(details.unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeStore;

    const DETAILS: &str = r#"{"friendly_name":"Kitchen Pico"}"#;

    #[tokio::test]
    async fn should_return_stored_details() {
        let svc = DeviceDetailsService::new(
            FakeStore::default().with(NAMESPACE, "dev-1", DETAILS),
            DetailsMissPolicy::EmptyOk,
        );
        assert_eq!(svc.get_details("dev-1").await.unwrap(), DETAILS);
    }

    #[tokio::test]
    async fn should_return_empty_details_on_miss_by_default() {
        let svc = DeviceDetailsService::new(FakeStore::default(), DetailsMissPolicy::default());
        assert_eq!(svc.get_details("missing").await.unwrap(), "");
    }

    #[tokio::test]
    async fn should_return_not_found_on_miss_when_strict() {
        let svc = DeviceDetailsService::new(FakeStore::default(), DetailsMissPolicy::NotFound);
        let result = svc.get_details("missing").await;
        assert!(matches!(result, Err(ViewrError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_empty_id_under_either_policy() {
        for policy in [DetailsMissPolicy::EmptyOk, DetailsMissPolicy::NotFound] {
            let svc = DeviceDetailsService::new(FakeStore::default(), policy);
            let result = svc.get_details("").await;
            assert!(matches!(
                result,
                Err(ViewrError::MissingIdentifier(Namespace::DeviceDetails))
            ));
            assert_eq!(svc.store.gets(), 0);
        }
    }
}
