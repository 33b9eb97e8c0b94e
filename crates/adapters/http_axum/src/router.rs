//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use viewr_app::ports::KeyValueStore;

use crate::error::NOT_FOUND;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api`, serves the overview pages at `/` and
/// `/dashboard/devices`, mounts the `/devices` debug dump, and answers every
/// unknown path with a plain-text 404. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::dashboard::connections::list::<S>))
        .route("/dashboard/devices", get(crate::dashboard::devices::list::<S>))
        .route("/health", get(health_check))
        .route("/devices", get(crate::debug::devices::<S>))
        .nest("/api", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::response::Response;
    use std::future::Future;

    use tower::ServiceExt;
    use viewr_adapter_memory::InMemoryKvStore;
    use viewr_domain::error::ViewrError;
    use viewr_domain::namespace::{DetailsMissPolicy, Namespace};

    /// Store whose every call fails.
    #[derive(Clone)]
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(
            &self,
            _namespace: Namespace,
            _key: &str,
        ) -> impl Future<Output = Result<Option<String>, ViewrError>> + Send {
            async { Err(ViewrError::Storage("store unavailable".into())) }
        }

        fn list(
            &self,
            _namespace: Namespace,
        ) -> impl Future<Output = Result<Vec<String>, ViewrError>> + Send {
            async { Err(ViewrError::Storage("store unavailable".into())) }
        }

        fn put(
            &self,
            _namespace: Namespace,
            _key: &str,
            _value: &str,
        ) -> impl Future<Output = Result<(), ViewrError>> + Send {
            async { Err(ViewrError::Storage("store unavailable".into())) }
        }
    }

    fn seeded_store() -> InMemoryKvStore {
        InMemoryKvStore::with_entries([
            (Namespace::DeviceStatus, "dev-1", "online"),
            (Namespace::DeviceStatus, "dev-2", "offline"),
            (Namespace::DeviceDetails, "dev-1", r#"{"friendly_name":"Pico"}"#),
            (Namespace::DeviceIdConnectionMapping, "dev-1", "ssid=home"),
            (Namespace::DeviceIdConnectionMapping, "dev-2", "ethernet=aa:bb"),
            (Namespace::ConnectionDeviceStatus, "ssid=home::dev-1", "Reporting"),
        ])
    }

    fn app_with(store: &InMemoryKvStore, details_miss: DetailsMissPolicy) -> Router {
        build(AppState::from_store(store, details_miss))
    }

    fn app() -> Router {
        app_with(&seeded_store(), DetailsMissPolicy::EmptyOk)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_raw_device_status() {
        let response = get(app(), "/api/device/status/dev-1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/plain"));
        assert_eq!(body_text(response).await, "online");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_device_status() {
        let response = get(app(), "/api/device/status/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found");
    }

    #[tokio::test]
    async fn should_return_not_found_for_empty_device_status_id() {
        let response = get(app(), "/api/device/status/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found");
    }

    #[tokio::test]
    async fn should_list_device_status_keys_as_json() {
        let response = get(app(), "/api/device/list").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"["dev-1","dev-2"]"#);
    }

    #[tokio::test]
    async fn should_return_raw_connection_status() {
        let response = get(app(), "/api/connection/ssid=home::dev-1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Reporting");
    }

    #[tokio::test]
    async fn should_list_connection_keys_as_json() {
        let response = get(app(), "/api/connection/list").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"["ssid=home::dev-1"]"#);
    }

    #[tokio::test]
    async fn should_return_connection_mapping_as_json_string() {
        let response = get(app(), "/api/device/connection/dev-1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("application/json"));
        assert_eq!(body_text(response).await, r#""ssid=home""#);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unmapped_device() {
        let response = get(app(), "/api/device/connection/dev-9").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_list_device_connections_in_key_order() {
        let response = get(app(), "/api/device/connection/list").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!([
                {"device_id": "dev-1", "connection": "ssid=home"},
                {"device_id": "dev-2", "connection": "ethernet=aa:bb"},
            ])
        );
    }

    #[tokio::test]
    async fn should_return_raw_device_details() {
        let response = get(app(), "/api/device/details/dev-1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"friendly_name":"Pico"}"#);
    }

    #[tokio::test]
    async fn should_return_empty_ok_for_unknown_device_details() {
        let response = get(app(), "/api/device/details/missing").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_device_details_when_strict() {
        let app = app_with(&seeded_store(), DetailsMissPolicy::NotFound);
        let response = get(app, "/api/device/details/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_explain_missing_device_details_id() {
        let response = get(app(), "/api/device/details/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "Device with that id was not found"
        );
    }

    #[tokio::test]
    async fn should_dump_device_keys_as_plain_text() {
        let response = get(app(), "/devices").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/plain"));
        assert_eq!(body_text(response).await, "dev-1,dev-2");
    }

    #[tokio::test]
    async fn should_return_empty_lists_for_empty_store() {
        let app = app_with(&InMemoryKvStore::new(), DetailsMissPolicy::EmptyOk);
        let response = get(app, "/api/connection/list").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn should_return_plain_not_found_for_unknown_path() {
        let response = get(app(), "/api/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found");
    }

    #[tokio::test]
    async fn should_reject_non_get_methods() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/device/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_store_unavailable() {
        for uri in [
            "/api/device/list",
            "/api/device/status/dev-1",
            "/api/device/connection/list",
            "/api/connection/ssid=home::dev-1",
            "/devices",
            "/",
            "/dashboard/devices",
        ] {
            let app = build(AppState::from_store(
                &UnavailableStore,
                DetailsMissPolicy::EmptyOk,
            ));
            let response = get(app, uri).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{uri}"
            );
            assert_eq!(body_text(response).await, "internal server error", "{uri}");
        }
    }

    #[tokio::test]
    async fn should_render_connections_page_grouped_by_connection() {
        let store = InMemoryKvStore::with_entries([
            (
                Namespace::ConnectionDeviceStatus,
                "ssid=home::dev-1",
                "\"Reporting\"",
            ),
            (
                Namespace::ConnectionDeviceStatus,
                "ssid=home::dev-2",
                "\"Offline\"",
            ),
            (Namespace::ConnectionDeviceStatus, "broken-key", "\"Stopped\""),
        ]);
        let response = get(app_with(&store, DetailsMissPolicy::EmptyOk), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        let body = body_text(response).await;
        assert_eq!(body.matches("ssid=home").count(), 1);
        assert!(body.contains("device-status reporting"));
        assert!(body.contains(">dev-1</span>"));
        assert!(body.contains("device-status offline"));
        assert!(body.contains(">dev-2</span>"));
        assert!(!body.contains("broken-key"));
    }

    #[tokio::test]
    async fn should_render_empty_connections_page() {
        let response = get(
            app_with(&InMemoryKvStore::new(), DetailsMissPolicy::EmptyOk),
            "/",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No connections found"));
    }

    #[tokio::test]
    async fn should_render_devices_page_grouped_by_state() {
        let store = InMemoryKvStore::with_entries([
            (Namespace::DeviceStatus, "dev-a", "\"Stopped\""),
            (Namespace::DeviceStatus, "dev-b", "\"Reporting\""),
            (Namespace::DeviceStatus, "dev-c", "online"),
        ]);
        let response = get(
            app_with(&store, DetailsMissPolicy::EmptyOk),
            "/dashboard/devices",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        let body = body_text(response).await;
        let position = |needle: &str| body.find(needle).unwrap();
        assert!(position("<h2>Reporting</h2>") < position("<li>dev-b</li>"));
        assert!(position("<li>dev-b</li>") < position("<h2>Offline</h2>"));
        assert!(position("<h2>Stopped</h2>") < position("<li>dev-a</li>"));
        assert!(position("<h2>Unknown</h2>") < position("<li>dev-c</li>"));
    }

    #[tokio::test]
    async fn should_escape_device_ids_in_pages() {
        let store = InMemoryKvStore::with_entries([(
            Namespace::DeviceStatus,
            "<script>",
            "\"Reporting\"",
        )]);
        let response = get(
            app_with(&store, DetailsMissPolicy::EmptyOk),
            "/dashboard/devices",
        )
        .await;
        let body = body_text(response).await;
        assert!(!body.contains("<li><script></li>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
