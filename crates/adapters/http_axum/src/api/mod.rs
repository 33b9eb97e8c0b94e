//! JSON / plain-text API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod connections;
#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};

use viewr_app::ports::KeyValueStore;
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::{Namespace, ValueEncoding};

use crate::error::ApiError;
use crate::state::AppState;

/// A value read from a namespace, encoded the way that namespace is served.
pub enum ValueResponse {
    /// `200 text/plain` with the stored string as body.
    Raw(String),
    /// `200 application/json` with the stored string as a JSON string.
    Json(Json<String>),
}

impl ValueResponse {
    #[must_use]
    pub fn encode(namespace: Namespace, value: String) -> Self {
        match namespace.encoding() {
            ValueEncoding::Raw => Self::Raw(value),
            ValueEncoding::Json => Self::Json(Json(value)),
        }
    }
}

impl IntoResponse for ValueResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Raw(body) => body.into_response(),
            Self::Json(json) => json.into_response(),
        }
    }
}

/// `GET` on a lookup path with the id segment left empty.
fn missing_id<S>(namespace: Namespace) -> MethodRouter<AppState<S>>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    get(move || async move { ApiError::from(ViewrError::MissingIdentifier(namespace)) })
}

/// Build the `/api` sub-router.
///
/// The static `list` segments take priority over the `{id}` captures.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    Router::new()
        // Connection-device status
        .route("/connection/list", get(connections::list::<S>))
        .route("/connection/{id}", get(connections::get::<S>))
        .route("/connection/", missing_id(Namespace::ConnectionDeviceStatus))
        // Device status
        .route("/device/list", get(devices::list_statuses::<S>))
        .route("/device/status/{id}", get(devices::get_status::<S>))
        .route("/device/status/", missing_id(Namespace::DeviceStatus))
        // Device details
        .route("/device/details/{id}", get(devices::get_details::<S>))
        .route("/device/details/", missing_id(Namespace::DeviceDetails))
        // Device → connection mapping
        .route(
            "/device/connection/list",
            get(devices::list_connections::<S>),
        )
        .route("/device/connection/{id}", get(devices::get_connection::<S>))
        .route(
            "/device/connection/",
            missing_id(Namespace::DeviceIdConnectionMapping),
        )
}
