//! Handlers for the device namespaces: status, details, and connection mapping.

use axum::Json;
use axum::extract::{Path, State};

use viewr_app::ports::KeyValueStore;
use viewr_domain::connection::DeviceConnection;
use viewr_domain::namespace::Namespace;

use super::ValueResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/device/list`
pub async fn list_statuses<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let keys = state.device_status_service.list_keys().await?;
    Ok(Json(keys))
}

/// `GET /api/device/status/{id}`
pub async fn get_status<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ValueResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let status = state.device_status_service.get_status(&id).await?;
    Ok(ValueResponse::encode(Namespace::DeviceStatus, status))
}

/// `GET /api/device/details/{id}`
pub async fn get_details<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ValueResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let details = state.device_details_service.get_details(&id).await?;
    Ok(ValueResponse::encode(Namespace::DeviceDetails, details))
}

/// `GET /api/device/connection/list`
pub async fn list_connections<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<DeviceConnection>>, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let mappings = state.device_connection_service.list_connections().await?;
    Ok(Json(mappings))
}

/// `GET /api/device/connection/{id}`
pub async fn get_connection<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ValueResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let connection = state.device_connection_service.get_connection(&id).await?;
    Ok(ValueResponse::encode(
        Namespace::DeviceIdConnectionMapping,
        connection,
    ))
}
