//! Devices-by-state overview page.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use viewr_app::ports::KeyValueStore;
use viewr_app::services::overview_service::StateGroup;

use crate::error::ApiError;
use crate::state::AppState;

/// Device state page template.
#[derive(Template)]
#[template(path = "devices.html")]
pub struct DevicesTemplate {
    refresh_seconds: u32,
    groups: Vec<StateGroup>,
}

impl IntoResponse for DevicesTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /dashboard/devices` — devices grouped by state.
///
/// # Errors
///
/// Returns [`ApiError`] when the store cannot be read.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<DevicesTemplate, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let groups = state.overview_service.devices_by_state().await?;
    Ok(DevicesTemplate {
        refresh_seconds: super::REFRESH_SECONDS,
        groups,
    })
}
