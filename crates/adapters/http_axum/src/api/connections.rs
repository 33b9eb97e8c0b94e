//! Handlers for the connection-device status namespace.

use axum::Json;
use axum::extract::{Path, State};

use viewr_app::ports::KeyValueStore;
use viewr_domain::namespace::Namespace;

use super::ValueResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/connection/list`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<String>>, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let keys = state.connection_status_service.list_keys().await?;
    Ok(Json(keys))
}

/// `GET /api/connection/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ValueResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let status = state.connection_status_service.get_status(&id).await?;
    Ok(ValueResponse::encode(
        Namespace::ConnectionDeviceStatus,
        status,
    ))
}
