//! Shared application state for axum handlers.

use std::sync::Arc;

use viewr_app::ports::KeyValueStore;
use viewr_app::services::connection_status_service::ConnectionStatusService;
use viewr_app::services::device_connection_service::DeviceConnectionService;
use viewr_app::services::device_details_service::DeviceDetailsService;
use viewr_app::services::device_status_service::DeviceStatusService;
use viewr_app::services::overview_service::OverviewService;
use viewr_domain::namespace::DetailsMissPolicy;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// `CONNECTION_DEVICE_STATUS` lookups.
    pub connection_status_service: Arc<ConnectionStatusService<S>>,
    /// `DEVICE_ID_CONNECTION_MAPPING` lookups.
    pub device_connection_service: Arc<DeviceConnectionService<S>>,
    /// `DEVICE_DETAILS` lookups.
    pub device_details_service: Arc<DeviceDetailsService<S>>,
    /// `DEVICE_STATUS` lookups.
    pub device_status_service: Arc<DeviceStatusService<S>>,
    /// Groupings behind the dashboard pages.
    pub overview_service: Arc<OverviewService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            connection_status_service: Arc::clone(&self.connection_status_service),
            device_connection_service: Arc::clone(&self.device_connection_service),
            device_details_service: Arc::clone(&self.device_details_service),
            device_status_service: Arc::clone(&self.device_status_service),
            overview_service: Arc::clone(&self.overview_service),
        }
    }
}

impl<S> AppState<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        connection_status_service: ConnectionStatusService<S>,
        device_connection_service: DeviceConnectionService<S>,
        device_details_service: DeviceDetailsService<S>,
        device_status_service: DeviceStatusService<S>,
        overview_service: OverviewService<S>,
    ) -> Self {
        Self {
            connection_status_service: Arc::new(connection_status_service),
            device_connection_service: Arc::new(device_connection_service),
            device_details_service: Arc::new(device_details_service),
            device_status_service: Arc::new(device_status_service),
            overview_service: Arc::new(overview_service),
        }
    }
}

impl<S> AppState<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    /// Create every service over clones of one store handle.
    pub fn from_store(store: &S, details_miss: DetailsMissPolicy) -> Self {
        Self::new(
            ConnectionStatusService::new(store.clone()),
            DeviceConnectionService::new(store.clone()),
            DeviceDetailsService::new(store.clone(), details_miss),
            DeviceStatusService::new(store.clone()),
            OverviewService::new(store.clone()),
        )
    }
}
