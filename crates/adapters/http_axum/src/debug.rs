//! Diagnostic endpoints.

use axum::extract::State;

use viewr_app::ports::KeyValueStore;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /devices` — logs the device status keys and echoes them comma-joined
/// as plain text.
///
/// # Errors
///
/// Returns [`ApiError`] when the store cannot be listed.
pub async fn devices<S>(State(state): State<AppState<S>>) -> Result<String, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let keys = state.device_status_service.dump_keys().await?;
    Ok(keys.join(","))
}
