//! Connections overview page.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use viewr_app::ports::KeyValueStore;
use viewr_app::services::overview_service::ConnectionGroup;

use crate::error::ApiError;
use crate::state::AppState;

/// Connections page template.
#[derive(Template)]
#[template(path = "connections.html")]
pub struct ConnectionsTemplate {
    refresh_seconds: u32,
    groups: Vec<ConnectionGroup>,
}

impl IntoResponse for ConnectionsTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /` — devices grouped by connection.
///
/// # Errors
///
/// Returns [`ApiError`] when the store cannot be read.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ConnectionsTemplate, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let groups = state.overview_service.connections().await?;
    Ok(ConnectionsTemplate {
        refresh_seconds: super::REFRESH_SECONDS,
        groups,
    })
}
